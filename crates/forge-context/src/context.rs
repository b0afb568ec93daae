//! The assembled build context
//!
//! [`BuildContext::for_directory`] runs unit discovery, locates the bundle
//! and loads the optional directive, producing one snapshot that later
//! commands read. The only mutation allowed afterwards is setting the
//! language allow-list.

use std::path::Path;

use forge_fs::NormalizedPath;
use forge_meta::Directive;

use crate::module::{self, ModuleFile};
use crate::{BundleRef, Error, Result, RunnableDir, bundle, scanner};

/// Everything known about the project in a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    cwd: NormalizedPath,
    cwd_is_runnable: bool,
    runnables: Vec<RunnableDir>,
    bundle: BundleRef,
    directive: Option<Directive>,
    runtime_version: Option<String>,
    langs: Option<Vec<String>>,
}

impl BuildContext {
    /// Build the context for `dir`.
    ///
    /// Relative paths are resolved against the process working directory.
    /// Fails on the first fatal error; no partial context is returned.
    pub fn for_directory(dir: impl AsRef<Path>) -> Result<Self> {
        let cwd = NormalizedPath::absolute(dir.as_ref())
            .map_err(|e| Error::stage("resolve working directory", e))?;

        let scan = scanner::scan(&cwd).map_err(|e| Error::stage("discover runnables", e))?;

        let bundle = bundle::locate(&cwd).map_err(|e| Error::stage("locate bundle", e))?;

        let directive = Directive::load(&cwd).map_err(|e| Error::stage("load directive", e))?;

        let runtime_version = directive
            .as_ref()
            .and_then(Directive::runtime_version)
            .map(str::to_string);

        tracing::debug!(
            cwd = %cwd,
            runnables = scan.runnables.len(),
            cwd_is_runnable = scan.cwd_is_runnable,
            bundle_exists = bundle.exists,
            has_directive = directive.is_some(),
            "build context ready"
        );

        Ok(Self {
            cwd,
            cwd_is_runnable: scan.cwd_is_runnable,
            runnables: scan.runnables,
            bundle,
            directive,
            runtime_version,
            langs: None,
        })
    }

    /// Absolute working directory.
    pub fn cwd(&self) -> &NormalizedPath {
        &self.cwd
    }

    /// True when the working directory is itself a unit.
    pub fn cwd_is_runnable(&self) -> bool {
        self.cwd_is_runnable
    }

    /// Discovered units, in discovery order.
    pub fn runnables(&self) -> &[RunnableDir] {
        &self.runnables
    }

    /// Bundle path and existence at the time the context was built.
    pub fn bundle(&self) -> &BundleRef {
        &self.bundle
    }

    /// The project directive, if the project has one.
    pub fn directive(&self) -> Option<&Directive> {
        self.directive.as_ref()
    }

    /// Runtime version declared by the directive, if any.
    pub fn runtime_version(&self) -> Option<&str> {
        self.runtime_version.as_deref()
    }

    /// Check whether a unit named exactly `name` was discovered.
    pub fn runnable_exists(&self, name: &str) -> bool {
        self.runnable(name).is_some()
    }

    /// Look up a discovered unit by exact name.
    pub fn runnable(&self, name: &str) -> Option<&RunnableDir> {
        self.runnables.iter().find(|r| r.name == name)
    }

    /// Restrict building to `langs`, replacing any earlier allow-list.
    ///
    /// An empty allow-list permits every language.
    pub fn set_build_langs<I, S>(&mut self, langs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.langs = Some(langs.into_iter().map(Into::into).collect());
    }

    /// The language allow-list, if one was set.
    pub fn build_langs(&self) -> Option<&[String]> {
        self.langs.as_deref()
    }

    /// Check whether units in `lang` should be built.
    ///
    /// True for every language until a non-empty allow-list is set; after
    /// that, only for exact matches.
    pub fn should_build_lang(&self, lang: &str) -> bool {
        match self.langs.as_deref() {
            None | Some([]) => true,
            Some(langs) => langs.iter().any(|l| l == lang),
        }
    }

    /// Units whose language passes the allow-list, in discovery order.
    pub fn runnables_to_build(&self) -> impl Iterator<Item = &RunnableDir> {
        self.runnables
            .iter()
            .filter(|r| self.should_build_lang(r.lang()))
    }

    /// Open the compiled module of every unit, in discovery order.
    ///
    /// Fails on the first module that cannot be opened; handles opened
    /// before the failure are closed.
    pub fn modules(&self) -> Result<Vec<ModuleFile>> {
        module::open_all(&self.runnables)
    }
}
