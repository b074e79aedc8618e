//!
//! Observes the editing of a text widget.
//!
//! [TextFieldDelegate] gets asked before anything happens to
//! the text and is notified when editing starts and ends.
//!
//! [CurrencyDelegate] does the currency formatting, and can
//! forward everything to a second delegate. That one gets the
//! first say on each edit and is notified before the currency
//! formatting runs at the end of editing.
//!

use crate::engine::{CurrencyEngine, EditRequest};
use crate::text_host::TextHost;
use crate::upos_type;
use dyn_clone::{DynClone, clone_box};
use log::debug;
use std::fmt::Debug;
use std::ops::Range;

/// Editing lifecycle of a text widget.
///
/// Everything defaults to 'go ahead'.
pub trait TextFieldDelegate: DynClone + Debug {
    /// Editing may start?
    fn should_begin_editing(&mut self, _host: &dyn TextHost) -> bool {
        true
    }

    /// Editing started.
    fn did_begin_editing(&mut self, _host: &mut dyn TextHost) {}

    /// Editing may end?
    fn should_end_editing(&mut self, _host: &dyn TextHost) -> bool {
        true
    }

    /// Editing ended.
    fn did_end_editing(&mut self, _host: &mut dyn TextHost) {}

    /// Text may be cleared?
    fn should_clear(&mut self, _host: &dyn TextHost) -> bool {
        true
    }

    /// Return/Enter may be processed?
    fn should_return(&mut self, _host: &dyn TextHost) -> bool {
        true
    }

    /// The range of the text is about to be replaced.
    ///
    /// Returns true if the host should apply the edit itself.
    /// The delegate may change the text of the host and return
    /// false instead.
    fn should_change_text(
        &mut self,
        _host: &mut dyn TextHost,
        _range: Range<upos_type>,
        _replacement: &str,
    ) -> bool {
        true
    }
}

impl Clone for Box<dyn TextFieldDelegate> {
    fn clone(&self) -> Self {
        clone_box(self.as_ref())
    }
}

/// Delegate that accepts everything.
#[derive(Debug, Default, Clone)]
pub struct NoDelegate;

impl TextFieldDelegate for NoDelegate {}

/// Currency formatting as a [TextFieldDelegate].
#[derive(Debug, Default, Clone)]
pub struct CurrencyDelegate {
    engine: CurrencyEngine,
    passthrough: Option<Box<dyn TextFieldDelegate>>,
}

impl CurrencyDelegate {
    pub fn new(engine: CurrencyEngine) -> Self {
        Self {
            engine,
            passthrough: None,
        }
    }

    /// Forward to this delegate.
    pub fn with_passthrough(mut self, delegate: impl TextFieldDelegate + 'static) -> Self {
        self.passthrough = Some(Box::new(delegate));
        self
    }

    /// Forward to this delegate.
    pub fn set_passthrough(&mut self, delegate: impl TextFieldDelegate + 'static) {
        self.passthrough = Some(Box::new(delegate));
    }

    /// Remove the second delegate.
    pub fn take_passthrough(&mut self) -> Option<Box<dyn TextFieldDelegate>> {
        self.passthrough.take()
    }

    /// Second delegate.
    pub fn passthrough(&self) -> Option<&dyn TextFieldDelegate> {
        self.passthrough.as_deref()
    }

    pub fn engine(&self) -> &CurrencyEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CurrencyEngine {
        &mut self.engine
    }
}

impl TextFieldDelegate for CurrencyDelegate {
    fn should_begin_editing(&mut self, host: &dyn TextHost) -> bool {
        match &mut self.passthrough {
            Some(p) => p.should_begin_editing(host),
            None => true,
        }
    }

    fn did_begin_editing(&mut self, host: &mut dyn TextHost) {
        if let Some(p) = &mut self.passthrough {
            p.did_begin_editing(host);
        }
    }

    fn should_end_editing(&mut self, host: &dyn TextHost) -> bool {
        match &mut self.passthrough {
            Some(p) => p.should_end_editing(host),
            None => true,
        }
    }

    /// Forwards and then reformats the text with all decimal places.
    fn did_end_editing(&mut self, host: &mut dyn TextHost) {
        if let Some(p) = &mut self.passthrough {
            p.did_end_editing(host);
        }
        if let Some(text) = self.engine.end_editing(host.text()) {
            host.set_text(&text);
        }
    }

    fn should_clear(&mut self, host: &dyn TextHost) -> bool {
        match &mut self.passthrough {
            Some(p) => p.should_clear(host),
            None => true,
        }
    }

    fn should_return(&mut self, host: &dyn TextHost) -> bool {
        match &mut self.passthrough {
            Some(p) => p.should_return(host),
            None => true,
        }
    }

    /// The second delegate can veto the edit. Otherwise the
    /// formatted text is written to the host right away.
    fn should_change_text(
        &mut self,
        host: &mut dyn TextHost,
        range: Range<upos_type>,
        replacement: &str,
    ) -> bool {
        if let Some(p) = &mut self.passthrough {
            if !p.should_change_text(host, range.clone(), replacement) {
                debug!("currency edit vetoed {:?} {:?}", range, replacement);
                return false;
            }
        }

        let result = self
            .engine
            .edit(&EditRequest::new(host.text(), range, replacement));

        if let (Some(text), Some(cursor)) = (&result.new_text, result.new_cursor) {
            host.set_text(text);
            if let Err(e) = host.set_cursor(cursor) {
                debug!("currency cursor {:?}", e);
            }
        }

        result.accepted
    }
}
