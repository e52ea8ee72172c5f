/// Anything advanced by the CPU's shared `tick` function once per
/// instruction, in whole-cycle batches rather than one clock edge at a time.
///
/// The teacher workspace's `Component` ticks one clock edge per call; the
/// console modeled here only needs M-cycle granularity (spec.md explicitly
/// puts sub-M-cycle memory timing out of scope), so `TickSink::tick` takes
/// the batch size directly instead of being called once per edge.
pub trait TickSink {
    /// Advance this component by `cycles` CPU-observed clock cycles.
    fn tick(&mut self, cycles: u8);
}
