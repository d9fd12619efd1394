//! Background runtime service ports.

/// Durable background job queue
pub trait JobManager: Send + Sync {}

/// Samples UI frame timings for performance telemetry
pub trait FrameRateTracker: Send + Sync {}

/// Fan-out point for database change notifications
pub trait DatabaseObserver: Send + Sync {}

/// Decides which in-app announcements are eligible to show
pub trait MegaphoneRepository: Send + Sync {}

/// In-memory cache of recipient records
pub trait RecipientCache: Send + Sync {}

/// Periodically trims conversation threads by date
pub trait ThreadTrimmer: Send + Sync {}
