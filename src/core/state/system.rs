use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                // The terminal was cleared while suspended
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut system = SystemState::default();

        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);

        let cmds = system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_system_state_resize_generates_command() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24));

        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }

    #[test]
    fn test_status_message_flow_unit() {
        let mut system = SystemState::default();
        assert!(system.status_message().is_none());

        let cmds = system.update(SystemMsg::UpdateStatusMessage("Ready".to_string()));
        assert!(cmds.is_empty());
        assert_eq!(system.status_message(), Some(&"Ready".to_string()));

        let cmds = system.update(SystemMsg::ClearStatusMessage);
        assert!(cmds.is_empty());
        assert!(system.status_message().is_none());
    }

    #[test]
    fn test_show_error_logs() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::ShowError("boom".to_string()));

        assert_eq!(system.status_message.as_deref(), Some("Error: boom"));
        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "boom".to_string()
            }]
        );
    }
}
