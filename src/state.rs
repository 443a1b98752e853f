use crate::services::IntakeService;

#[derive(Clone)]
pub struct AppState {
    pub intake: IntakeService,
}
