#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum AnimationState {
    #[default]
    Idle,      // No animation in flight, triggers accepted
    Animating, // An animation cycle is running, triggers rejected
}
