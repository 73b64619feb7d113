use std::sync::OnceLock;

/// Where the process identifier comes from
#[cfg_attr(test, mockall::automock)]
pub trait PidSource {
    /// Query the current process identifier
    fn current_pid(&self) -> u32;
}

/// Operating-system process identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPid;

impl PidSource for OsPid {
    fn current_pid(&self) -> u32 {
        std::process::id()
    }
}

/// Process identifier fetched on first access and cached afterwards
#[derive(Debug)]
pub struct ProcessIdentity<S> {
    source: S,
    pid: OnceLock<u32>,
}

impl<S: PidSource> ProcessIdentity<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pid: OnceLock::new(),
        }
    }

    /// Returns the cached identifier, querying the source on the first call only
    pub fn get(&self) -> u32 {
        *self.pid.get_or_init(|| self.source.current_pid())
    }

    /// Whether the identifier has been fetched yet
    pub fn is_cached(&self) -> bool {
        self.pid.get().is_some()
    }
}

lazy_static::lazy_static! {
    static ref PROCESS_IDENTITY: ProcessIdentity<OsPid> = ProcessIdentity::new(OsPid);
}

/// Process-wide identifier used to tag every log line
pub fn get_process_id() -> u32 {
    PROCESS_IDENTITY.get()
}
