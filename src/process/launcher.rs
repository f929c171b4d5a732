use std::ffi::CString;
use std::fs::File;
use std::io::{self, Read};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use log::debug;

use super::{ProcessError, TerminationOutcome};

/// Exit status of a child whose `execv` failed.
pub const EXEC_FAILURE_STATUS: libc::c_int = 127;

/// Result of a child that was created and reaped.
#[derive(Debug)]
pub struct Launched {
    pub outcome: TerminationOutcome,
    /// Set when the child could not replace its image; the outcome is then a
    /// normal exit with [`EXEC_FAILURE_STATUS`].
    pub exec_failure: Option<io::Error>,
}

/// Forks, execs `path` with `argv` in the child and waits for that child.
///
/// The environment is inherited unchanged. Every allocation happens before
/// `fork()`; the child only calls `signal`, `execv`, `write` and `_exit`, so buffered
/// output inherited from this process is never flushed twice.
pub fn launch(path: &Path, argv: &[String]) -> Result<Launched, ProcessError> {
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| ProcessError::InvalidArgument(path.to_string_lossy().into_owned()))?;
    let c_args = argv
        .iter()
        .map(|arg| {
            CString::new(arg.as_bytes()).map_err(|_| ProcessError::InvalidArgument(arg.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mut c_argv: Vec<*const libc::c_char> = c_args.iter().map(|arg| arg.as_ptr()).collect();
    c_argv.push(std::ptr::null());

    let (read_end, write_end) = exec_error_pipe().map_err(ProcessError::Pipe)?;

    let pid = unsafe { libc::fork() };
    if pid < 0 {
        return Err(ProcessError::Fork(io::Error::last_os_error()));
    }
    if pid == 0 {
        unsafe { exec_child(&c_path, &c_argv, write_end.as_raw_fd()) }
    }

    debug!("forked pid {} for {}", pid, path.display());
    drop(write_end);
    let exec_failure = read_exec_error(read_end);
    let status = wait_for(pid)?;
    let outcome = TerminationOutcome::from_wait_status(status);
    debug!("pid {} finished: {:?}", pid, outcome);

    Ok(Launched {
        outcome,
        exec_failure,
    })
}

/// Runs in the forked child. Never returns.
unsafe fn exec_child(path: &CString, argv: &[*const libc::c_char], report_fd: RawFd) -> ! {
    // The Rust runtime ignores SIGPIPE, and ignored dispositions survive exec.
    libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    libc::execv(path.as_ptr(), argv.as_ptr());

    // Only reached when execv failed.
    let errno = io::Error::last_os_error().raw_os_error().unwrap_or(0);
    let bytes = errno.to_ne_bytes();
    libc::write(report_fd, bytes.as_ptr().cast(), bytes.len());
    libc::_exit(EXEC_FAILURE_STATUS)
}

/// A close-on-exec pipe: it reads EOF once the child has exec'd, or the
/// child's errno if `execv` failed.
fn exec_error_pipe() -> io::Result<(OwnedFd, OwnedFd)> {
    let mut fds: [libc::c_int; 2] = [-1; 2];

    #[cfg(any(target_os = "linux", target_os = "android"))]
    let rc = unsafe { libc::pipe2(fds.as_mut_ptr(), libc::O_CLOEXEC) };
    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };

    if rc < 0 {
        return Err(io::Error::last_os_error());
    }
    let (read_end, write_end) = unsafe { (OwnedFd::from_raw_fd(fds[0]), OwnedFd::from_raw_fd(fds[1])) };

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    for fd in [&read_end, &write_end] {
        if unsafe { libc::fcntl(fd.as_raw_fd(), libc::F_SETFD, libc::FD_CLOEXEC) } < 0 {
            return Err(io::Error::last_os_error());
        }
    }

    Ok((read_end, write_end))
}

fn read_exec_error(read_end: OwnedFd) -> Option<io::Error> {
    let mut pipe = File::from(read_end);
    let mut report = Vec::with_capacity(4);
    if let Err(e) = pipe.read_to_end(&mut report) {
        debug!("could not read exec status pipe: {}", e);
        return None;
    }

    let bytes: [u8; 4] = report.as_slice().try_into().ok()?;
    Some(io::Error::from_raw_os_error(i32::from_ne_bytes(bytes)))
}

fn wait_for(pid: libc::pid_t) -> Result<libc::c_int, ProcessError> {
    let mut status: libc::c_int = 0;
    loop {
        if unsafe { libc::waitpid(pid, &mut status, 0) } == pid {
            return Ok(status);
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(ProcessError::Wait(err));
        }
    }
}
