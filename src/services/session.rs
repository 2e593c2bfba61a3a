use tracing::debug;

use crate::models::field::{FieldEvent, FieldId, FormFields};
use crate::services::calculator::{guard_submit, Calculator, SubmitDecision, TotalRender};

/// Output port for the calculator: a thin adapter that writes render
/// results to the real UI and surfaces the blocking alert. Keeps the
/// calculation logic testable without any terminal attached.
pub trait FieldSink {
    fn apply_total(&mut self, render: &TotalRender);
    fn alert(&mut self, message: &str);
}

/// One live form binding: the field store, the calculator (when the form
/// is complete), and the sink the renders flow through. Everything runs
/// synchronously on the caller's thread.
pub struct FormSession<S: FieldSink> {
    fields: FormFields,
    calculator: Option<Calculator>,
    sink: S,
    guarded: bool,
}

impl<S: FieldSink> FormSession<S> {
    /// Binds the calculator to a form. When all four fields are present
    /// this performs the one immediate recomputation; otherwise the
    /// session stays inert and field events become no-ops.
    pub fn initialize(fields: FormFields, sink: S) -> Self {
        Self::build(fields, sink, true)
    }

    /// A binding with no form element located: field events behave as
    /// usual but submission is never gated.
    pub fn without_form(fields: FormFields, sink: S) -> Self {
        Self::build(fields, sink, false)
    }

    fn build(fields: FormFields, sink: S, guarded: bool) -> Self {
        let calculator = Calculator::initialize(&fields);
        let mut session = Self {
            fields,
            calculator,
            sink,
            guarded,
        };
        session.recompute_and_render();
        session
    }

    /// Whether the calculator attached (all four fields present).
    pub fn is_live(&self) -> bool {
        self.calculator.is_some()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn total_text(&self) -> Option<&str> {
        self.fields.value(FieldId::Total)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Feeds one field event into the session. Input, change, and blur all
    /// trigger the same recomputation, so redundant firings for a single
    /// keystroke are harmless. Events on the total field only store the
    /// manually edited text; the total is never an input to itself.
    pub fn dispatch(&mut self, field: FieldId, event: FieldEvent, value: impl Into<String>) {
        if !self.fields.set_value(field, value) {
            return;
        }
        debug!(field = %field, ?event, "field event");

        if field.is_operand() {
            self.recompute_and_render();
        }
    }

    /// Plays the form's submit action. Returns false when the guard blocks
    /// (the alert has been raised through the sink); true lets the default
    /// submission proceed, including when the form or the total field is
    /// absent and the guard never installed.
    pub fn submit(&mut self) -> bool {
        if !self.guarded {
            return true;
        }
        let Some(total_text) = self.fields.value(FieldId::Total) else {
            return true;
        };

        match guard_submit(total_text) {
            SubmitDecision::Allow => true,
            SubmitDecision::Block { message } => {
                self.sink.alert(message);
                false
            }
        }
    }

    fn recompute_and_render(&mut self) {
        if let Some(calculator) = &self.calculator {
            let render = calculator.recompute(&self.fields);
            self.fields.set_value(FieldId::Total, render.value.clone());
            self.sink.apply_total(&render);
        }
    }
}
