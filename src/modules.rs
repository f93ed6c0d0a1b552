//! Maps changed files to the Maven modules that own them.

use std::collections::BTreeSet;
use std::path::{Component, Path};

use tracing::debug;

use crate::error::CIError;
use crate::CIResult;

const POM: &str = "pom.xml";

/// Modules owning the changed files, relative to `root`.
///
/// An empty result means the whole reactor has to be built: either nothing
/// changed, or a file owned by the root pom did.
pub fn changed_modules<S>(root: &Path, changed_files: &[S]) -> CIResult<Vec<String>>
where
    S: AsRef<str>,
{
    let mut modules = BTreeSet::new();
    let mut whole_reactor = false;

    for file in changed_files.iter().map(|f| f.as_ref().trim()) {
        if file.is_empty() {
            continue;
        }

        let path = Path::new(file);
        if !path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(CIError::PathOutsideRoot(file.to_string()).into());
        }

        match owning_module(root, path) {
            Some(module) => {
                debug!("{} belongs to module {}", file, module);
                modules.insert(module);
            }
            None => {
                debug!("{} belongs to the root module", file);
                whole_reactor = true;
            }
        }
    }

    if whole_reactor {
        return Ok(Vec::new());
    }

    Ok(modules.into_iter().collect())
}

/// Nearest ancestor directory of `path` holding a pom, excluding `root` itself.
fn owning_module(root: &Path, path: &Path) -> Option<String> {
    path.ancestors()
        .skip(1)
        .take_while(|dir| !dir.as_os_str().is_empty() && *dir != Path::new("."))
        .find(|dir| root.join(dir).join(POM).is_file())
        .map(|dir| {
            dir.components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
}
