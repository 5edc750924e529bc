use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui::{self, Frame},
    presentation::components::Components,
};

/// Draws the components for a state snapshot
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut Frame<'_>| self.components.render(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    #[tokio::test]
    async fn renderer_renders_with_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(80, 24)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::<Mutex<TestTui>>::clone(&test_tui);
        let renderer = Renderer::new();

        renderer.render(&tui, &AppState::default()).await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        assert!(guard.screen().contains("Hello, Everyone!"));
        Ok(())
    }
}
