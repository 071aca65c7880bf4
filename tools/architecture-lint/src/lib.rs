//! Repo-local architectural lint for the chat backend.
//!
//! The backend is a hexagonal monolith (`domain` + ports, inbound adapters,
//! outbound adapters) built on the shared `outcome` crate. This crate
//! provides a lightweight lint that:
//!
//! - forbids `domain` code from depending on adapter modules (`inbound`,
//!   `outbound`) or on the web framework
//! - forbids `inbound` adapters from importing `outbound` modules
//! - forbids `outbound` adapters from importing `inbound` modules or the web
//!   framework
//! - keeps the `outcome` crate framework-free
//! - allows panic capture (`catch_unwind`) only inside the outcome
//!   combinators
//! - allows matching on `FailureKind::Authentication` only inside the outcome
//!   failure taxonomy and transport adapter, so status selection lives in one
//!   place
//!
//! The lint is executed via `cargo run -p architecture-lint`.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use syn::visit::Visit;

/// Directory of the outcome crate sources, relative to `backend/`.
const OUTCOME_SRC: &str = "crates/outcome/src";

/// Path prefixes (relative to `backend/`) that may catch unwinding panics.
const CATCH_UNWIND_ALLOWED: &[&str] = &[
    "crates/outcome/src/chain",
    "crates/outcome/src/chain_async",
];

/// Path prefixes (relative to `backend/`) that may name the authentication
/// failure kind.
const AUTHENTICATION_KIND_ALLOWED: &[&str] = &[
    "crates/outcome/src/failure",
    "crates/outcome/src/transport",
];

/// Web framework crates kept out of the domain, outbound adapters and the
/// outcome crate.
const FRAMEWORK_CRATES: &[&str] = &["actix", "actix_http", "actix_rt", "actix_web", "awc"];

/// A single rule violation discovered by the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `backend/`.
    pub file: PathBuf,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Failure modes returned by the architecture lint.
#[derive(Debug)]
pub enum ArchitectureLintError {
    /// Filesystem traversal or reading failed.
    Io(io::Error),
    /// Rust source parsing failed.
    Parse {
        /// File that could not be parsed.
        file: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// One or more rule violations were found.
    Violations(Vec<Violation>),
}

impl fmt::Display for ArchitectureLintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error while linting architecture: {err}"),
            Self::Parse { file, message } => write!(
                f,
                "Failed to parse Rust source while linting architecture ({}): {message}",
                file.display()
            ),
            Self::Violations(violations) => {
                writeln!(f, "Architecture violations:")?;
                for violation in violations {
                    writeln!(f, "- {violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ArchitectureLintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ArchitectureLintError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Lint the backend and outcome crate sources on disk.
///
/// `backend_dir` must be the `backend/` directory at the repository root.
/// Files under `backend/src` and `backend/crates/outcome/src` are checked.
pub fn lint_backend_sources(backend_dir: &Path) -> Result<(), ArchitectureLintError> {
    let mut sources = Vec::new();
    for root in ["src", OUTCOME_SRC] {
        let dir = backend_dir.join(root);
        if dir.exists() {
            collect_sources_under(backend_dir, &dir, &mut sources)?;
        }
    }
    lint_sources(&sources)
}

/// Lint the provided Rust sources. Intended for unit and behaviour tests.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();

    for source in sources {
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        let area = SourceArea::infer_from_path(&source.file);
        violations.extend(lint_parsed_source(&source.file, area, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `backend/`.
    pub file: PathBuf,
    /// Rust source text.
    pub contents: String,
}

/// The architectural area inferred from a file path under `backend/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceArea {
    Domain,
    Inbound,
    Outbound,
    Outcome,
    /// Composition root and crate-level files; only the global rules apply.
    Other,
}

impl SourceArea {
    fn infer_from_path(relative_path: &Path) -> Self {
        if relative_path.starts_with(OUTCOME_SRC) {
            return Self::Outcome;
        }
        let Ok(rest) = relative_path.strip_prefix("src") else {
            return Self::Other;
        };
        let first = rest
            .components()
            .next()
            .map(|component| component.as_os_str().to_string_lossy());
        match first.as_deref() {
            Some("domain") => Self::Domain,
            Some("inbound") => Self::Inbound,
            Some("outbound") => Self::Outbound,
            _ => Self::Other,
        }
    }

    fn forbidden_module_roots(self) -> BTreeSet<&'static str> {
        match self {
            Self::Domain => BTreeSet::from(["inbound", "outbound"]),
            Self::Inbound => BTreeSet::from(["outbound"]),
            Self::Outbound => BTreeSet::from(["inbound"]),
            Self::Outcome | Self::Other => BTreeSet::new(),
        }
    }

    fn forbidden_crate_roots(self) -> BTreeSet<&'static str> {
        match self {
            Self::Domain | Self::Outbound => FRAMEWORK_CRATES.iter().copied().collect(),
            Self::Outcome => FRAMEWORK_CRATES
                .iter()
                .copied()
                .chain(["chat_backend"])
                .collect(),
            Self::Inbound | Self::Other => BTreeSet::new(),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
            Self::Outcome => "outcome",
            Self::Other => "backend",
        }
    }
}

fn lint_parsed_source(file: &Path, area: SourceArea, parsed: &syn::File) -> Vec<Violation> {
    let mut collector = PathCollector::default();
    collector.visit_file(parsed);

    let mut messages = boundary_messages(area, &collector);
    messages.extend(confinement_messages(file, &collector));

    messages
        .into_iter()
        .map(|message| Violation {
            file: file.to_path_buf(),
            message,
        })
        .collect()
}

fn boundary_messages(area: SourceArea, collector: &PathCollector) -> BTreeSet<String> {
    let forbidden_modules = area.forbidden_module_roots();
    let forbidden_crates = area.forbidden_crate_roots();
    let area_name = area.name();

    let mut messages = BTreeSet::new();
    for segments in &collector.paths {
        if let Some(root) = forbidden_internal_module_root(segments, &forbidden_modules) {
            messages.insert(format!("{area_name} module must not depend on crate::{root}"));
        }

        if let Some(root) = forbidden_external_crate_root(segments, &forbidden_crates) {
            messages.insert(format!(
                "{area_name} module must not depend on external crate `{root}`"
            ));
        }
    }
    messages
}

fn confinement_messages(file: &Path, collector: &PathCollector) -> BTreeSet<String> {
    let mut messages = BTreeSet::new();

    if collector.mentions("catch_unwind") && !is_allowed(file, CATCH_UNWIND_ALLOWED) {
        messages.insert(
            "only the outcome combinators may catch unwinding panics (`catch_unwind`)".to_owned(),
        );
    }

    if collector.names_authentication_kind() && !is_allowed(file, AUTHENTICATION_KIND_ALLOWED) {
        messages.insert(
            "only the outcome transport adapter may select on `FailureKind::Authentication`"
                .to_owned(),
        );
    }

    messages
}

fn is_allowed(file: &Path, prefixes: &[&str]) -> bool {
    let file = file.to_string_lossy().replace('\\', "/");
    prefixes.iter().any(|prefix| {
        file.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest == ".rs" || rest.starts_with('/'))
    })
}

fn forbidden_internal_module_root(
    segments: &[String],
    forbidden_roots: &BTreeSet<&'static str>,
) -> Option<&'static str> {
    let root = internal_module_root(segments)?;
    forbidden_roots.get(root).copied()
}

fn forbidden_external_crate_root(
    segments: &[String],
    forbidden_roots: &BTreeSet<&'static str>,
) -> Option<&'static str> {
    let root = external_crate_root(segments)?;
    forbidden_roots.get(root).copied()
}

fn is_relative_module_segment(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

fn internal_module_root(segments: &[String]) -> Option<&str> {
    let first = segments.first()?.as_str();
    if matches!(first, "domain" | "inbound" | "outbound") {
        return Some(first);
    }
    let start_index = match first {
        "crate" | "self" | "super" => segments
            .iter()
            .position(|segment| !is_relative_module_segment(segment.as_str()))?,
        "chat_backend" => 1,
        _ => return None,
    };
    segments.get(start_index).map(String::as_str)
}

fn external_crate_root(segments: &[String]) -> Option<&str> {
    let root = segments.first()?.as_str();
    if is_relative_module_segment(root) {
        return None;
    }
    Some(root)
}

#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
    methods: BTreeSet<String>,
}

impl PathCollector {
    fn mentions(&self, ident: &str) -> bool {
        self.methods.contains(ident)
            || self
                .paths
                .iter()
                .any(|segments| segments.iter().any(|segment| segment == ident))
    }

    fn names_authentication_kind(&self) -> bool {
        self.paths.iter().any(|segments| {
            segments
                .windows(2)
                .any(|pair| matches!(pair, [kind, variant] if kind == "FailureKind" && variant == "Authentication"))
        })
    }

    fn record_path(&mut self, path: &syn::Path) {
        let segments = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>();
        if segments.is_empty() {
            return;
        }
        self.paths.insert(segments);
    }

    fn record_use_tree(&mut self, tree: &syn::UseTree, prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                let mut next = prefix;
                next.push(path.ident.to_string());
                self.record_use_tree(&path.tree, next);
            }
            syn::UseTree::Name(name) => {
                let mut segments = prefix;
                segments.push(name.ident.to_string());
                self.paths.insert(segments);
            }
            syn::UseTree::Rename(rename) => {
                let mut segments = prefix;
                segments.push(rename.ident.to_string());
                self.paths.insert(segments);
            }
            syn::UseTree::Glob(_) => {
                let mut segments = prefix;
                segments.push("*".to_owned());
                self.paths.insert(segments);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix.clone());
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        self.record_path(node);
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.record_use_tree(&node.tree, Vec::new());
    }

    fn visit_expr_method_call(&mut self, node: &'ast syn::ExprMethodCall) {
        self.methods.insert(node.method.to_string());
        syn::visit::visit_expr_method_call(self, node);
    }
}

fn collect_sources_under(
    backend_root: &Path,
    current: &Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    for entry in fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_sources_under(backend_root, &path, sources)?;
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }

        let relative = path
            .strip_prefix(backend_root)
            .map_err(|err| ArchitectureLintError::Parse {
                file: path.clone(),
                message: err.to_string(),
            })?
            .to_path_buf();
        let contents = fs::read_to_string(&path)?;
        sources.push(LintSource {
            file: relative,
            contents,
        });
    }
    Ok(())
}
