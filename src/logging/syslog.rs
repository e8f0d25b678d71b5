//! Minimal RFC 3164 client for the local syslog socket.

use crate::reporter::{CRITICAL_TARGET, Severity};
use std::io::{self, Write};
use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Default local syslog socket.
pub const SYSLOG_SOCKET: &str = "/dev/log";

/// `LOG_USER`
const FACILITY_USER: u8 = 1;

/// A datagram socket connected to the syslog daemon.
///
/// The daemon may restart mid-run, so a failed send reconnects to the same
/// path and retries once.
#[derive(Debug)]
struct SyslogSocket {
    path: PathBuf,
    socket: Mutex<UnixDatagram>,
}

impl SyslogSocket {
    fn connect(path: &Path) -> io::Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            socket: Mutex::new(open(path)?),
        })
    }

    fn send(&self, datagram: &[u8]) -> io::Result<()> {
        let mut socket = self.socket.lock().unwrap_or_else(PoisonError::into_inner);
        if socket.send(datagram).is_ok() {
            return Ok(());
        }
        let fresh = open(&self.path)?;
        fresh.send(datagram)?;
        *socket = fresh;
        Ok(())
    }
}

fn open(path: &Path) -> io::Result<UnixDatagram> {
    let socket = UnixDatagram::unbound()?;
    socket.connect(path)?;
    Ok(socket)
}

/// Hands `tracing-subscriber` one [`SyslogLine`] per event.
#[derive(Debug, Clone)]
pub struct SyslogWriter {
    socket: Arc<SyslogSocket>,
    tag: String,
}

impl SyslogWriter {
    pub fn connect(socket_path: &Path, tag: impl Into<String>) -> io::Result<Self> {
        Ok(Self {
            socket: Arc::new(SyslogSocket::connect(socket_path)?),
            tag: tag.into(),
        })
    }

    fn line(&self, severity: Severity) -> SyslogLine {
        let priority = FACILITY_USER * 8 + severity.syslog_code();
        SyslogLine {
            socket: Arc::clone(&self.socket),
            header: format!("<{}>{}[{}]: ", priority, self.tag, std::process::id()),
            buf: Vec::new(),
        }
    }
}

/// Severity of a record from its `tracing` metadata.
pub fn severity_of(meta: &Metadata<'_>) -> Severity {
    if meta.target() == CRITICAL_TARGET {
        return Severity::Critical;
    }
    match *meta.level() {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warning,
        Level::INFO => Severity::Info,
        _ => Severity::Debug,
    }
}

impl<'a> MakeWriter<'a> for SyslogWriter {
    type Writer = SyslogLine;

    fn make_writer(&'a self) -> Self::Writer {
        self.line(Severity::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.line(severity_of(meta))
    }
}

/// Buffers one formatted event and sends it as a single datagram on drop.
///
/// A record the daemon cannot take goes to stderr instead.
#[derive(Debug)]
pub struct SyslogLine {
    socket: Arc<SyslogSocket>,
    header: String,
    buf: Vec<u8>,
}

impl SyslogLine {
    fn body(&self) -> &[u8] {
        let mut end = self.buf.len();
        while end > 0 && self.buf[end - 1] == b'\n' {
            end -= 1;
        }
        &self.buf[..end]
    }
}

impl Write for SyslogLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for SyslogLine {
    fn drop(&mut self) {
        let body = self.body();
        if body.is_empty() {
            return;
        }
        let mut datagram = self.header.as_bytes().to_vec();
        datagram.extend_from_slice(body);
        if let Err(e) = self.socket.send(&datagram) {
            let mut stderr = io::stderr().lock();
            // Last resort; nothing is left to report a failed stderr write to.
            let _ = writeln!(
                stderr,
                "syslog {} unavailable ({})",
                self.socket.path.display(),
                e
            );
            let _ = stderr.write_all(body);
            let _ = stderr.write_all(b"\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn receive(server: &UnixDatagram) -> String {
        let mut buf = [0u8; 1024];
        let n = server.recv(&mut buf).unwrap();
        String::from_utf8_lossy(&buf[..n]).into_owned()
    }

    #[test]
    fn test_sends_one_datagram_per_line() {
        let dir = TempDir::new().unwrap();
        let socket_path = dir.path().join("log.sock");
        let server = UnixDatagram::bind(&socket_path).unwrap();

        let writer = SyslogWriter::connect(&socket_path, "checkperms").unwrap();
        {
            let mut line = writer.line(Severity::Error);
            line.write_all(b"checkperms AUTOFS_PERMISSION_ERROR: ").unwrap();
            line.write_all(b"/nfs/a Permissions: drwxr-xr-x\n").unwrap();
        }

        let received = receive(&server);
        assert_eq!(
            received,
            format!(
                "<11>checkperms[{}]: checkperms AUTOFS_PERMISSION_ERROR: /nfs/a Permissions: drwxr-xr-x",
                std::process::id()
            )
        );
    }

    #[test]
    fn test_priority_per_severity() {
        let dir = TempDir::new().unwrap();
        let socket_path = dir.path().join("log.sock");
        let server = UnixDatagram::bind(&socket_path).unwrap();
        let writer = SyslogWriter::connect(&socket_path, "t").unwrap();

        for (severity, priority) in [
            (Severity::Info, "<14>"),
            (Severity::Warning, "<12>"),
            (Severity::Critical, "<10>"),
        ] {
            let mut line = writer.line(severity);
            line.write_all(b"x\n").unwrap();
            drop(line);
            assert!(receive(&server).starts_with(priority), "{severity}");
        }
    }

    #[test]
    fn test_connect_missing_socket() {
        let dir = TempDir::new().unwrap();
        assert!(SyslogWriter::connect(&dir.path().join("absent"), "t").is_err());
    }

    #[test]
    fn test_reconnects_after_daemon_restart() {
        let dir = TempDir::new().unwrap();
        let socket_path = dir.path().join("log.sock");
        let server = UnixDatagram::bind(&socket_path).unwrap();
        let writer = SyslogWriter::connect(&socket_path, "checkperms").unwrap();

        drop(server);
        fs::remove_file(&socket_path).unwrap();
        let restarted = UnixDatagram::bind(&socket_path).unwrap();
        restarted
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();

        {
            let mut line = writer.line(Severity::Error);
            line.write_all(b"checkperms AUTOFS_PERMISSION_ERROR: /nfs/a\n")
                .unwrap();
        }

        assert!(receive(&restarted).ends_with("AUTOFS_PERMISSION_ERROR: /nfs/a"));
    }

    #[test]
    fn test_send_fails_when_daemon_gone() {
        let dir = TempDir::new().unwrap();
        let socket_path = dir.path().join("log.sock");
        let server = UnixDatagram::bind(&socket_path).unwrap();
        let writer = SyslogWriter::connect(&socket_path, "t").unwrap();

        drop(server);
        fs::remove_file(&socket_path).unwrap();

        assert!(writer.socket.send(b"<14>t: x").is_err());
    }

    #[test]
    fn test_body_strips_trailing_newlines() {
        let dir = TempDir::new().unwrap();
        let socket_path = dir.path().join("log.sock");
        let _server = UnixDatagram::bind(&socket_path).unwrap();
        let writer = SyslogWriter::connect(&socket_path, "t").unwrap();

        let mut line = writer.line(Severity::Info);
        line.write_all(b"msg\n\n").unwrap();
        assert_eq!(line.body(), b"msg");
    }
}
