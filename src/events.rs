/// Event interface the driving loop dispatches into.
///
/// The loop delivers periodic ticks and asynchronous button presses to
/// whichever engine is active; both engines implement this. `on_press`
/// must be safe to call at any point between ticks.
pub trait InputHandler {
    /// Advance the simulation by exactly one tick.
    fn on_tick(&mut self);

    /// Handle a button press at grid coordinates (x, y).
    fn on_press(&mut self, x: i32, y: i32);
}
