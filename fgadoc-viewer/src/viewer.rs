use std::{cell::RefCell, rc::Rc};

use fgadoc_codegen::{CodegenError, LanguageDescriptor};
use fgadoc_ir::OperationModel;
use fgadoc_snippets::SnippetGenerator;

use crate::{LanguageSelectionStore, SelectionError, Subscription};

/// What a tabbed viewer shows under the selected tab.
pub trait TabContent {
    fn render(&self, language: &LanguageDescriptor) -> Result<String, CodegenError>;
}

/// Snippet content: one operation model rendered per language.
#[derive(Debug, Clone)]
pub struct ModelContent {
    model: OperationModel,
    generator: Rc<SnippetGenerator>,
}

impl ModelContent {
    pub fn new(model: OperationModel, generator: Rc<SnippetGenerator>) -> Self {
        Self { model, generator }
    }

    pub fn model(&self) -> &OperationModel {
        &self.model
    }
}

impl TabContent for ModelContent {
    fn render(&self, language: &LanguageDescriptor) -> Result<String, CodegenError> {
        self.generator
            .generate(&self.model, language.id)
            .map(|snippet| snippet.code)
    }
}

/// A viewer showing the snippet for one operation model.
pub type SnippetViewer = TabbedViewer<ModelContent>;

/// One entry of a viewer's tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

struct ViewerState<C> {
    content: C,
    language: LanguageDescriptor,
    output: Result<String, CodegenError>,
    renders: usize,
}

impl<C: TabContent> ViewerState<C> {
    fn render(&mut self, language: LanguageDescriptor) {
        self.output = self.content.render(&language);
        if let Err(e) = &self.output {
            tracing::error!(language = language.id, error = %e, "failed to render tab");
        }
        self.language = language;
        self.renders += 1;
    }
}

/// A set of tabs, one per registered language, following the page selection.
///
/// Mounting renders the selected language and subscribes to the store; every
/// selection re-renders. The viewer never keeps a selection of its own:
/// clicking a tab only forwards the id to the store.
pub struct TabbedViewer<C: TabContent + 'static> {
    store: Rc<LanguageSelectionStore>,
    state: Rc<RefCell<ViewerState<C>>>,
    subscription: Subscription,
}

impl<C: TabContent + 'static> TabbedViewer<C> {
    pub fn mount(content: C, store: &Rc<LanguageSelectionStore>) -> Self {
        let mut state = ViewerState {
            content,
            language: store.selected_descriptor(),
            output: Ok(String::new()),
            renders: 0,
        };
        state.render(store.selected_descriptor());
        let state = Rc::new(RefCell::new(state));

        let weak = Rc::downgrade(&state);
        let subscription = store.subscribe(move |language| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().render(*language);
            }
        });

        Self {
            store: Rc::clone(store),
            state,
            subscription,
        }
    }

    /// Tabs in registry order, the selected one marked active.
    pub fn tabs(&self) -> Vec<Tab> {
        let active = self.active();
        self.store
            .registry()
            .list()
            .iter()
            .map(|language| Tab {
                id: language.id,
                label: language.label,
                active: language.id == active,
            })
            .collect()
    }

    /// Id of the language currently rendered.
    pub fn active(&self) -> &'static str {
        self.state.borrow().language.id
    }

    /// The rendered text for the active language.
    pub fn output(&self) -> Result<String, CodegenError> {
        self.state.borrow().output.clone()
    }

    /// Number of renders since mount, including the initial one.
    pub fn render_count(&self) -> usize {
        self.state.borrow().renders
    }

    /// Handle a click on the tab for `id`.
    pub fn click(&self, id: &str) -> Result<(), SelectionError> {
        self.store.select(id)
    }

    /// Markdown for the viewer: the tab strip, then the active snippet in a
    /// fenced block tagged with the highlighter grammar.
    pub fn render_markdown(&self) -> String {
        let state = self.state.borrow();
        let strip: Vec<String> = self
            .tabs()
            .iter()
            .map(|tab| {
                if tab.active {
                    format!("**{}**", tab.label)
                } else {
                    tab.label.to_string()
                }
            })
            .collect();

        let mut markdown = strip.join(" | ");
        markdown.push_str("\n\n");
        match &state.output {
            Ok(code) => {
                markdown.push_str("```");
                markdown.push_str(state.language.profile.highlight);
                markdown.push('\n');
                markdown.push_str(code);
                if !code.ends_with('\n') {
                    markdown.push('\n');
                }
                markdown.push_str("```\n");
            }
            Err(e) => {
                markdown.push_str(&format!("> Snippet unavailable: {}\n", e));
            }
        }
        markdown
    }

    /// Unsubscribe from the store and drop the viewer.
    pub fn unmount(self) {
        tracing::debug!(language = self.active(), "unmounting viewer");
        self.subscription.unsubscribe();
    }
}
