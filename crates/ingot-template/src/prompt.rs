//! The modal "import model" prompt
//!
//! The dialog itself belongs to the editor. The template only needs something
//! that takes the suggested parameters, blocks until the user answers, and
//! reports either the edited parameters or a cancellation.

use ingot_asset::AssetReference;

/// The values shown in (and returned by) the import prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptParameters {
    pub import_materials: bool,
    pub import_textures: bool,
    pub import_skeleton: bool,
    /// "Reuse an existing skeleton" checkbox
    pub reuse_skeleton: bool,
    /// Skeleton picked in the prompt; only honoured while `reuse_skeleton` is set
    pub skeleton_to_reuse: Option<AssetReference>,
}

/// How the user closed the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirm(PromptParameters),
    Cancel,
}

/// A blocking interaction with the user
pub trait ImportPrompt {
    /// Show `initial` and wait for the user. Called at most once per import.
    fn show(&mut self, initial: &PromptParameters) -> DialogOutcome;
}

/// Confirms whatever it is shown, for headless and batch imports
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptDefaultsPrompt;

impl ImportPrompt for AcceptDefaultsPrompt {
    fn show(&mut self, initial: &PromptParameters) -> DialogOutcome {
        DialogOutcome::Confirm(initial.clone())
    }
}

impl<F> ImportPrompt for F
where
    F: FnMut(&PromptParameters) -> DialogOutcome,
{
    fn show(&mut self, initial: &PromptParameters) -> DialogOutcome {
        self(initial)
    }
}
