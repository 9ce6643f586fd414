//! Runs the report against a tracker and a process inspector

use super::{ListSummary, RecordReport, Report, Stage};
use crate::core::types::{ErrorCode, FileBlameError, FileBlameResult, ProcessRecord};
use crate::process::{resolve_image_path, ProcessInspector};
use crate::session::{fetch_list, ListPolicy, ResourceTracker, TrackingSession};
use std::ffi::OsStr;
use std::io::Write;
use tracing::{debug, info, warn};

/// Produces the file-usage report
pub struct Reporter<'a, T, I> {
    tracker: &'a T,
    inspector: &'a I,
    policy: ListPolicy,
}

impl<'a, T, I> Reporter<'a, T, I>
where
    T: ResourceTracker,
    I: ProcessInspector,
{
    pub fn new(tracker: &'a T, inspector: &'a I) -> Self {
        Reporter {
            tracker,
            inspector,
            policy: ListPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ListPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Report the holders of `path`, writing the text report to `out`.
    ///
    /// Service failures end up in the returned [`Report`]; only a failed
    /// write to `out` is an error.
    pub fn run<W: Write>(&self, path: &OsStr, out: &mut W) -> FileBlameResult<Report> {
        let display_path = path.to_string_lossy();
        info!(path = %display_path, "Looking up processes using file");

        let mut session = match self.tracker.start_session() {
            Ok(session) => {
                writeln!(out, "RmStartSession returned {}", ErrorCode::Success)?;
                session
            }
            Err(code) => {
                writeln!(out, "RmStartSession returned {}", code)?;
                warn!("{}", FileBlameError::SessionStart(code));
                return Ok(Report::new(code));
            }
        };
        debug!(key = session.session_key(), "Session open");

        let mut report = Report::new(ErrorCode::Success);

        let register_code = session.register_file(path);
        writeln!(
            out,
            "RmRegisterResources({}) returned {}",
            display_path, register_code
        )?;
        report.register_code = Some(register_code);
        if !register_code.is_success() {
            warn!(
                "{}",
                FileBlameError::RegisterResource {
                    path: display_path.to_string(),
                    code: register_code,
                }
            );
            report.stage = Stage::RegistrationFailed;
            return Ok(report);
        }

        let outcome = fetch_list(&mut session, &self.policy);
        writeln!(out, "RmGetList returned {}", outcome.code)?;
        report.list = Some(ListSummary::from(&outcome));
        if !outcome.is_usable() {
            warn!("{}", FileBlameError::GetList(outcome.code));
            report.stage = Stage::ListFailed;
            return Ok(report);
        }
        if outcome.reboot_reasons != 0 {
            debug!(reasons = outcome.reboot_reasons, "Restart Manager reports reboot reasons");
        }

        writeln!(
            out,
            "RmGetList returned {} infos ({} needed)",
            outcome.records.len(),
            outcome.needed
        )?;

        for (index, record) in outcome.records.into_iter().enumerate() {
            write_record(out, index, &record)?;

            let resolution = resolve_image_path(self.inspector, &record);
            if let Some(image_path) = &resolution.image_path {
                writeln!(out, "  = {}", image_path)?;
            }

            report.records.push(RecordReport {
                index,
                record,
                resolution,
            });
        }

        drop(session);
        info!(
            holders = report.records.len(),
            truncated = report.is_truncated(),
            "Report complete"
        );
        Ok(report)
    }
}

fn write_record<W: Write>(out: &mut W, index: usize, record: &ProcessRecord) -> FileBlameResult<()> {
    if record.is_service() {
        debug!(index, service = %record.service_short_name, "Holder is a service");
    }
    debug!(
        index,
        app_type = record.app_type.name(),
        ts_session = record.ts_session_id,
        restartable = record.restartable,
        started = ?record.start_time.to_system_time(),
        "Process record"
    );
    writeln!(out, "{}.ApplicationType = {}", index, record.app_type)?;
    writeln!(out, "{}.strAppName = {}", index, record.app_name)?;
    writeln!(out, "{}.Process.dwProcessId = {}", index, record.pid)?;
    Ok(())
}
