use egui::Context;

/// An application the platform shell can drive, one egui pass per frame.
pub trait UiApp {
    fn ui(&mut self, ctx: &Context);

    /// Window title requested at startup.
    fn title(&self) -> String {
        "vkeyboard".to_string()
    }
}
