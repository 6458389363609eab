/// Presentation surface the form flows talk to. The page (or terminal, or
/// test recorder) implements this; the gateway itself never touches it.
pub trait Presenter: Send + Sync {
    /// Toggle the busy indicator on the triggering control.
    fn set_busy(&self, busy: bool);

    /// Render a human-readable success result.
    fn render_result(&self, text: &str);

    /// Render an inline error message.
    fn render_error(&self, text: &str);

    /// Reset the form's input fields.
    fn clear_inputs(&self);
}
