use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's parsed `Cargo.toml`, used to find how a workspace crate is
/// reachable from the crate that invokes a derive.
///
/// # Example
///
/// ```rust
/// # use binder_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("binder_reflect"));
/// ```
///
/// Reading the manifest touches the file system, so a macro should resolve
/// each path once per invocation.
///
/// # Resolution rules
///
/// 1. A direct dependency on `name` resolves to `::name`.
/// 2. For `binder_*` names, a dependency on the `binder` facade resolves to
///    `::binder::*` (e.g. `binder_reflect` -> `::binder::reflect`).
/// 3. Steps 1-2 are repeated for `dev-dependencies`.
/// 4. Otherwise the result is `::name`.
///
/// A crate that derives on its own types should carry
/// `extern crate self as name;` so that `::name` also resolves inside it.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "binder";
const MEMBER_PREFIX: &str = "binder_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let Some(dir) = env::var_os("CARGO_MANIFEST_DIR") else {
            panic!("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        };
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn load(path: &PathBuf, modified_time: SystemTime) -> Self {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()));
        let manifest = Document::parse(text.into_boxed_str())
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()));
        Self {
            manifest,
            modified_time,
        }
    }

    fn path_of(segments: &[&str]) -> syn::Path {
        let text = segments.iter().fold(String::new(), |mut acc, seg| {
            acc.push_str("::");
            acc.push_str(seg);
            acc
        });
        syn::parse_str(&text)
            .unwrap_or_else(|_| panic!("`{text}` is not a valid path"))
    }

    fn resolve_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::path_of(&[name]));
        }
        let module = name.strip_prefix(MEMBER_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::path_of(&[FACADE_NAME, module]))
    }

    /// Returns the path under which crate `name` is reachable from the
    /// calling crate. See the type-level docs for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Self::resolve_in(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::path_of(&[name]))
    }

    /// Runs `func` against the caller's manifest.
    ///
    /// Manifests are cached per path and reloaded when the file's modified
    /// time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time = std::fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path, modified_time);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use std::time::SystemTime;
    use toml_edit::Document;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(Box::from(text)).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn render(path: &syn::Path) -> String {
        path.segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nbinder_reflect = \"0.0.1\"\n");
        assert_eq!(render(&m.get_crate_path("binder_reflect")), "binder_reflect");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dependencies]\nbinder = \"0.0.1\"\n");
        assert_eq!(render(&m.get_crate_path("binder_reflect")), "binder::reflect");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nbinder = \"0.0.1\"\n");
        assert_eq!(render(&m.get_crate_path("binder_reflect")), "binder::reflect");

        let m = manifest("[package]\nname = \"other\"\n");
        assert_eq!(render(&m.get_crate_path("binder_reflect")), "binder_reflect");
    }
}
