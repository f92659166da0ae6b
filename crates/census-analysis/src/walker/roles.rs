//! File role classification from path shape.

use census_core::types::source::FileRole;
use smallvec::SmallVec;

const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];
const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less", "styl"];
const LOCKFILES: &[&str] = &[
    "package-lock.json",
    "npm-shrinkwrap.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "bun.lockb",
    "bun.lock",
];
const APP_ROUTE_FILES: &[&str] = &["page", "route"];
const LOCALE_DIRS: &[&str] = &["locales", "i18n", "lang", "translations"];

pub fn is_script_extension(extension: &str) -> bool {
    SCRIPT_EXTENSIONS.contains(&extension)
}

/// Assign role hints to a file from its path and extension.
///
/// A file may carry several roles (a collocated `Button.test.tsx` is both a
/// test and component-adjacent); classification is additive, never
/// first-match.
pub fn classify(path: &str, extension: &str) -> SmallVec<[FileRole; 2]> {
    let mut roles: SmallVec<[FileRole; 2]> = SmallVec::new();

    let file_name = path.rsplit('/').next().unwrap_or(path);
    let stem = file_name
        .split_once('.')
        .map(|(s, _)| s)
        .unwrap_or(file_name);
    let components: Vec<&str> = path.split('/').collect();

    // Routing families
    if is_script_extension(extension) {
        if in_directory_family(&components, "app") {
            if APP_ROUTE_FILES.contains(&stem) {
                push_unique(&mut roles, FileRole::Route);
            }
            if stem == "layout" || stem == "template" {
                push_unique(&mut roles, FileRole::Layout);
            }
        }
        if in_directory_family(&components, "pages") {
            push_unique(&mut roles, FileRole::Route);
        }
    }

    // Tests
    if file_name.contains(".test.")
        || file_name.contains(".spec.")
        || components.contains(&"__tests__")
        || components.contains(&"tests")
        || components.contains(&"test")
    {
        push_unique(&mut roles, FileRole::Test);
    }

    // Styles
    if STYLE_EXTENSIONS.contains(&extension) {
        push_unique(&mut roles, FileRole::Style);
    }

    // Lint configuration
    if file_name.starts_with("eslint.config.")
        || file_name == ".eslintrc"
        || file_name.starts_with(".eslintrc.")
    {
        push_unique(&mut roles, FileRole::LintConfig);
    }

    // TypeScript/JavaScript project configuration
    if (file_name.starts_with("tsconfig") || file_name.starts_with("jsconfig"))
        && extension == "json"
    {
        push_unique(&mut roles, FileRole::TypeConfig);
    }

    // Dependency pinning
    if LOCKFILES.contains(&file_name) {
        push_unique(&mut roles, FileRole::Lockfile);
    }
    if file_name == "package.json" {
        push_unique(&mut roles, FileRole::Manifest);
    }

    // Locale resources
    if extension == "json" && components.iter().any(|c| LOCALE_DIRS.contains(c)) {
        push_unique(&mut roles, FileRole::Locale);
    }

    // Documentation
    if extension == "md" || extension == "mdx" {
        push_unique(&mut roles, FileRole::Documentation);
    }

    // Components: PascalCase script files outside the routing directories
    if is_script_extension(extension)
        && stem.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && !roles.contains(&FileRole::Route)
    {
        push_unique(&mut roles, FileRole::Component);
    }

    roles
}

fn push_unique(roles: &mut SmallVec<[FileRole; 2]>, role: FileRole) {
    if !roles.contains(&role) {
        roles.push(role);
    }
}

/// Whether `app/` or `pages/` (optionally under `src/`) heads the path.
fn in_directory_family(components: &[&str], family: &str) -> bool {
    match components.first() {
        Some(&first) if first == family => true,
        Some(&"src") => components.get(1) == Some(&family),
        _ => false,
    }
}
