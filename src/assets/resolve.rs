//! Mapping request paths onto files under the asset root.

use std::path::{Component, Path, PathBuf};

use crate::config::AssetsConfig;

/// Where static files come from and which paths are off limits.
#[derive(Debug, Clone)]
pub struct AssetRoot {
    root: PathBuf,
    index_file: PathBuf,
    api_prefix: String,
}

impl AssetRoot {
    pub fn new(config: &AssetsConfig) -> Self {
        Self {
            root: PathBuf::from(&config.root_dir),
            index_file: PathBuf::from(&config.index_file),
            api_prefix: config.api_prefix.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths under the API prefix are never answered from disk.
    pub fn is_api_path(&self, path: &str) -> bool {
        path.trim_start_matches('/').starts_with(&self.api_prefix)
    }

    /// The root document, if it exists.
    pub async fn resolve_index(&self) -> Option<PathBuf> {
        self.resolve_relative(&self.index_file).await
    }

    /// A regular file at `path` under the root, if one exists and stays inside it.
    pub async fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = contained_relative(path.trim_start_matches('/'))?;
        self.resolve_relative(&relative).await
    }

    async fn resolve_relative(&self, relative: &Path) -> Option<PathBuf> {
        let root = tokio::fs::canonicalize(&self.root).await.ok()?;
        let candidate = tokio::fs::canonicalize(root.join(relative)).await.ok()?;

        // Symlinks may still point outside.
        if !candidate.starts_with(&root) {
            tracing::warn!(path = %relative.display(), "Asset resolved outside root");
            return None;
        }

        let metadata = tokio::fs::metadata(&candidate).await.ok()?;
        metadata.is_file().then_some(candidate)
    }
}

/// Keep only plain components; anything that could climb out is refused.
fn contained_relative(path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (!relative.as_os_str().is_empty()).then_some(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> (tempfile::TempDir, AssetRoot) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>hi</h1>").unwrap();
        fs::create_dir(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css/site.css"), "body{}").unwrap();

        let config = AssetsConfig {
            root_dir: dir.path().to_string_lossy().into_owned(),
            ..AssetsConfig::default()
        };
        (dir, AssetRoot::new(&config))
    }

    #[test]
    fn test_contained_relative() {
        assert_eq!(contained_relative("css/site.css"), Some(PathBuf::from("css/site.css")));
        assert_eq!(contained_relative("./css/./site.css"), Some(PathBuf::from("css/site.css")));
        assert_eq!(contained_relative("../secret"), None);
        assert_eq!(contained_relative("css/../../secret"), None);
        assert_eq!(contained_relative("/etc/passwd"), None);
        assert_eq!(contained_relative(""), None);
    }

    #[test]
    fn test_api_prefix() {
        let root = AssetRoot::new(&AssetsConfig::default());
        assert!(root.is_api_path("api/anything"));
        assert!(root.is_api_path("/api/generate"));
        assert!(!root.is_api_path("apiary.html"));
        assert!(!root.is_api_path("css/api/x.css"));
    }

    #[tokio::test]
    async fn test_resolve_existing_file() {
        let (_dir, root) = site();
        let found = root.resolve("css/site.css").await.unwrap();
        assert!(found.ends_with("css/site.css"));
        assert!(root.resolve_index().await.unwrap().ends_with("index.html"));
    }

    #[tokio::test]
    async fn test_directories_and_missing_files_are_absent() {
        let (_dir, root) = site();
        assert!(root.resolve("css").await.is_none());
        assert!(root.resolve("nope.js").await.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_out_of_root_is_refused() {
        let (dir, root) = site();
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("secret.txt"), "top secret").unwrap();
        std::os::unix::fs::symlink(outside.path().join("secret.txt"), dir.path().join("leak.txt"))
            .unwrap();

        assert!(root.resolve("leak.txt").await.is_none());
    }

    #[tokio::test]
    async fn test_missing_root_resolves_nothing() {
        let root = AssetRoot::new(&AssetsConfig {
            root_dir: "/no/such/asset/root".into(),
            ..AssetsConfig::default()
        });
        assert!(root.resolve_index().await.is_none());
    }
}
