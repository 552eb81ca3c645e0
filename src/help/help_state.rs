pub struct HelpPopupState {
    pub visible: bool,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

impl Default for HelpPopupState {
    fn default() -> Self {
        Self::new()
    }
}
