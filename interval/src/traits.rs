/// End-time sentinel accepted by `Interval::start`: play through to the end
/// of the interval instead of stopping at a fixed time
pub const PLAY_TO_END: f64 = -1.0;

///
/// The underlying interval primitive
///
/// Implementations are owned and advanced by an external runtime scheduler;
/// the time-control glue only observes them and proxies mutations through.
///
pub trait Interval : Send {
    ///
    /// Sets the current time of this interval
    ///
    /// This is the raw primitive: it performs no observer notification of its
    /// own (that's the glue's job, via `IntervalControl::set_time`)
    ///
    fn raw_set_time(&mut self, time: f64);

    ///
    /// Begins playback from `start_time`, running until `end_time` at the
    /// given playback rate
    ///
    /// An `end_time` of `PLAY_TO_END` means the interval plays through to
    /// its full duration.
    ///
    fn start(&mut self, start_time: f64, end_time: f64, playback_rate: f64);

    ///
    /// Stops playback and moves the interval to its final state
    ///
    fn finish(&mut self);

    ///
    /// Halts time advancement without changing the current time
    ///
    fn pause(&mut self);

    ///
    /// Resumes time advancement at the given playback rate
    ///
    fn resume(&mut self, playback_rate: f64);

    /// The current time offset into this interval's timeline
    fn time(&self) -> f64;

    /// The total length of this interval
    fn duration(&self) -> f64;

    /// The name of this interval (used for labelling and diagnostics)
    fn name(&self) -> String;
}

///
/// Trait implemented by items that want to be told when an interval's time
/// is set
///
pub trait TimeObserver : Send+Sync {
    ///
    /// Indicates that the observed interval's time has been set
    ///
    fn time_set(&self, new_time: f64);
}

///
/// Trait implemented by an object that can be released: for example, to stop
/// observing an interval when the observer is no longer required
///
pub trait Releasable : Send {
    ///
    /// Indicates that this object should not be released on drop
    ///
    fn keep_alive(&mut self);

    ///
    /// Indicates that this object is finished with and should be released
    ///
    /// Releasing an already-released object is a no-op, so teardown paths
    /// can call this without tracking whether it has happened before.
    ///
    fn done(&mut self);
}
