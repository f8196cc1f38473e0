//! Preview registry
//!
//! Named, browsable instances of message views for manual QA. The registry
//! is populated during an explicit startup phase by the integrating
//! application and is read-only once request handling begins.

use crate::message::MessageView;
use crate::preview::form::FormSpec;
use std::collections::BTreeMap;
use std::collections::HashMap;
use tracing::debug;

/// Builds a message view for one preview request, optionally parameterized
/// by validated form values.
pub type ViewFactory =
    Box<dyn Fn(&HashMap<String, String>) -> Box<dyn MessageView + Send + Sync> + Send + Sync>;

/// A registered preview: a message view constructor plus display metadata.
pub struct Preview {
    module: String,
    name: String,
    verbose_name: Option<String>,
    description: Option<String>,
    form: Option<FormSpec>,
    factory: ViewFactory,
}

impl Preview {
    /// Registers under `(module, name)`. Callers usually pass
    /// [`module_path!`] so previews group by the module that declares them.
    pub fn new<F>(module: impl Into<String>, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&HashMap<String, String>) -> Box<dyn MessageView + Send + Sync>
            + Send
            + Sync
            + 'static,
    {
        Self {
            module: module.into(),
            name: name.into(),
            verbose_name: None,
            description: None,
            form: None,
            factory: Box::new(factory),
        }
    }

    /// Human-readable title shown in the index; defaults to the preview
    /// name.
    pub fn verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
        self.verbose_name = Some(verbose_name.into());
        self
    }

    /// Longer description shown in the index.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declares a customization form for this preview.
    pub fn form(mut self, spec: FormSpec) -> Self {
        self.form = Some(spec);
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        self.verbose_name.as_deref().unwrap_or(&self.name)
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn form_spec(&self) -> Option<&FormSpec> {
        self.form.as_ref()
    }

    /// URL of this preview's detail page.
    pub fn url_path(&self) -> String {
        format!("/{}/{}/", self.module, self.name)
    }

    pub fn build_view(&self, args: &HashMap<String, String>) -> Box<dyn MessageView + Send + Sync> {
        (self.factory)(args)
    }
}

impl std::fmt::Debug for Preview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preview")
            .field("module", &self.module)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One module grouping in the preview index.
#[derive(Debug)]
pub struct ModulePreviews<'a> {
    pub module: &'a str,
    pub previews: Vec<&'a Preview>,
}

#[derive(Debug, Default)]
pub struct PreviewSite {
    previews: BTreeMap<String, BTreeMap<String, Preview>>,
}

impl PreviewSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a preview to the index. Registering the same `(module, name)`
    /// twice silently replaces the earlier entry.
    pub fn register(&mut self, preview: Preview) {
        debug!(module = %preview.module(), name = %preview.name(), "registering preview");
        self.previews
            .entry(preview.module().to_string())
            .or_default()
            .insert(preview.name().to_string(), preview);
    }

    /// The index: modules sorted lexicographically, previews within each
    /// module sorted by display name. Pure; safe to call per request.
    pub fn modules(&self) -> Vec<ModulePreviews<'_>> {
        self.previews
            .iter()
            .map(|(module, index)| {
                let mut previews: Vec<&Preview> = index.values().collect();
                previews.sort_by(|a, b| a.display_name().cmp(b.display_name()));
                ModulePreviews {
                    module: module.as_str(),
                    previews,
                }
            })
            .collect()
    }

    pub fn get(&self, module: &str, name: &str) -> Option<&Preview> {
        self.previews.get(module)?.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    pub fn len(&self) -> usize {
        self.previews.values().map(BTreeMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Context, Renderer, TemplatedMessageView};

    fn preview(module: &str, name: &str) -> Preview {
        Preview::new(module, name, |_args| {
            Box::new(
                TemplatedMessageView::new(Renderer::empty())
                    .subject_source("subject")
                    .body_source("body"),
            )
        })
    }

    #[test]
    fn test_listing_sorted_by_module_then_display_name() {
        let mut site = PreviewSite::new();
        site.register(preview("b.views", "Second"));
        site.register(preview("a.views", "Zulu").verbose_name("Zulu Message"));
        site.register(preview("a.views", "Alpha"));

        let modules = site.modules();
        assert_eq!(modules[0].module, "a.views");
        assert_eq!(modules[1].module, "b.views");

        let names: Vec<&str> = modules[0]
            .previews
            .iter()
            .map(|preview| preview.display_name())
            .collect();
        assert_eq!(names, vec!["Alpha", "Zulu Message"]);
    }

    #[test]
    fn test_register_same_key_replaces() {
        let mut site = PreviewSite::new();
        site.register(preview("a.views", "Message").verbose_name("First"));
        site.register(preview("a.views", "Message").verbose_name("Second"));

        assert_eq!(site.len(), 1);
        let registered = site.get("a.views", "Message").unwrap();
        assert_eq!(registered.display_name(), "Second");
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let site = PreviewSite::new();
        assert!(site.get("a.views", "Message").is_none());
    }

    #[test]
    fn test_registered_preview_builds_a_working_view() {
        let mut site = PreviewSite::new();
        site.register(preview("a.views", "Message"));

        let view = site
            .get("a.views", "Message")
            .unwrap()
            .build_view(&HashMap::new());
        assert_eq!(view.render_subject(&Context::new()).unwrap(), "subject");
    }
}
