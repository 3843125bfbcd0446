use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

type ConfirmCallback = Box<dyn Fn()>;

/// State of the yes/no confirmation prompt. One dialog lives at the app
/// root; whoever needs a confirmation installs a message and a callback,
/// and nothing happens until the user answers.
#[derive(Clone)]
pub struct ConfirmDialogContext {
    pub is_open: Signal<bool>,
    title: Rc<RefCell<String>>,
    message: Rc<RefCell<String>>,
    on_confirm: Rc<RefCell<Option<Rc<ConfirmCallback>>>>,
}

impl Default for ConfirmDialogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmDialogContext {
    pub fn new() -> Self {
        Self {
            is_open: Signal::new(false),
            title: Rc::new(RefCell::new(String::new())),
            message: Rc::new(RefCell::new(String::new())),
            on_confirm: Rc::new(RefCell::new(None)),
        }
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    pub fn show(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: impl Fn() + 'static,
    ) {
        *self.title.borrow_mut() = title.into();
        *self.message.borrow_mut() = message.into();
        *self.on_confirm.borrow_mut() = Some(Rc::new(Box::new(on_confirm)));
        let mut is_open = self.is_open;
        is_open.set(true);
    }

    /// Run the installed callback. The dialog closes first so the callback
    /// sees a closed prompt.
    pub fn confirm(&self) {
        let callback = self.on_confirm.borrow().clone();
        self.hide();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn hide(&self) {
        let mut is_open = self.is_open;
        is_open.set(false);
        *self.on_confirm.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // Signals need a live runtime, so the scenarios run inside a component
    // rendered by a headless VirtualDom. Outcomes are recorded in a
    // thread-local so the test body can assert after the render.
    thread_local! {
        static CONFIRMED: Cell<u32> = const { Cell::new(0) };
    }

    fn confirmations() -> u32 {
        CONFIRMED.with(|count| count.get())
    }

    fn record_confirmation() {
        CONFIRMED.with(|count| count.set(count.get() + 1));
    }

    fn dismiss_scenario() -> Element {
        let dialog = ConfirmDialogContext::new();

        // Installing the callback must not run it
        dialog.show("Delete person", "Sure?", record_confirmation);
        assert!(*dialog.is_open.read());
        assert_eq!(confirmations(), 0);

        // Dismissing drops the callback without running it
        dialog.hide();
        assert!(!*dialog.is_open.read());
        assert_eq!(confirmations(), 0);

        // A confirm after dismissal has nothing left to run
        dialog.confirm();

        rsx! { div {} }
    }

    fn confirm_scenario() -> Element {
        let dialog = ConfirmDialogContext::new();

        dialog.show("Delete person", "Sure?", record_confirmation);
        dialog.confirm();
        assert!(!*dialog.is_open.read());

        // The callback is consumed; a second confirm must not rerun it
        dialog.confirm();

        rsx! { div {} }
    }

    #[test]
    fn test_dismissing_the_dialog_never_runs_the_callback() {
        CONFIRMED.with(|count| count.set(0));
        let mut dom = VirtualDom::new(dismiss_scenario);
        dom.rebuild_in_place();
        assert_eq!(confirmations(), 0);
    }

    #[test]
    fn test_confirm_runs_the_callback_exactly_once() {
        CONFIRMED.with(|count| count.set(0));
        let mut dom = VirtualDom::new(confirm_scenario);
        dom.rebuild_in_place();
        assert_eq!(confirmations(), 1);
    }
}
