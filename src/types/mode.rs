//! POSIX mode bits.

use std::fmt;

const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Read, write and execute bits for "other".
pub const WORLD_BITS: u32 = 0o007;

/// A raw `st_mode` value, file type bits included.
///
/// Displays the way `ls -l` does, e.g. `drwxr-x--x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(u32);

impl Mode {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Mode of a directory with the given permission bits.
    pub fn directory(permissions: u32) -> Self {
        Self(S_IFDIR | (permissions & 0o7777))
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Permission bits only (setuid/setgid/sticky included).
    pub fn permissions(&self) -> u32 {
        self.0 & 0o7777
    }

    pub fn is_dir(&self) -> bool {
        self.0 & S_IFMT == S_IFDIR
    }

    /// True when any of world-read, world-write or world-execute is set.
    pub fn has_world_access(&self) -> bool {
        self.0 & WORLD_BITS != 0
    }

    fn type_char(&self) -> char {
        match self.0 & S_IFMT {
            S_IFDIR => 'd',
            S_IFLNK => 'l',
            S_IFSOCK => 's',
            S_IFBLK => 'b',
            S_IFCHR => 'c',
            S_IFIFO => 'p',
            S_IFREG => '-',
            _ => '-',
        }
    }
}

/// One `rwx` triplet. `special` is setuid/setgid/sticky for that class.
fn push_triplet(out: &mut String, bits: u32, special: bool, special_set: char, special_only: char) {
    out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
    out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
    let exec = bits & 0o1 != 0;
    out.push(match (special, exec) {
        (true, true) => special_set,
        (true, false) => special_only,
        (false, true) => 'x',
        (false, false) => '-',
    });
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(10);
        out.push(self.type_char());
        push_triplet(&mut out, (self.0 >> 6) & 0o7, self.0 & S_ISUID != 0, 's', 'S');
        push_triplet(&mut out, (self.0 >> 3) & 0o7, self.0 & S_ISGID != 0, 's', 'S');
        push_triplet(&mut out, self.0 & 0o7, self.0 & S_ISVTX != 0, 't', 'T');
        f.write_str(&out)
    }
}

impl From<u32> for Mode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_access_ignores_owner_and_group() {
        for perms in 0..0o1000u32 {
            let mode = Mode::directory(perms);
            assert_eq!(mode.has_world_access(), perms & 0o7 != 0, "mode {:o}", perms);
        }
    }

    #[test]
    fn test_world_access_each_bit() {
        assert!(Mode::directory(0o704).has_world_access());
        assert!(Mode::directory(0o702).has_world_access());
        assert!(Mode::directory(0o701).has_world_access());
        assert!(!Mode::directory(0o770).has_world_access());
    }

    #[test]
    fn test_display_directory() {
        assert_eq!(Mode::directory(0o755).to_string(), "drwxr-xr-x");
        assert_eq!(Mode::directory(0o700).to_string(), "drwx------");
        assert_eq!(Mode::directory(0o711).to_string(), "drwx--x--x");
    }

    #[test]
    fn test_display_special_bits() {
        assert_eq!(Mode::directory(0o1777).to_string(), "drwxrwxrwt");
        assert_eq!(Mode::directory(0o1770).to_string(), "drwxrwx--T");
        assert_eq!(Mode::directory(0o2750).to_string(), "drwxr-s---");
        assert_eq!(Mode::new(S_IFREG | 0o4644).to_string(), "-rwSr--r--");
    }

    #[test]
    fn test_display_file_types() {
        assert_eq!(Mode::new(S_IFLNK | 0o777).to_string(), "lrwxrwxrwx");
        assert_eq!(Mode::new(S_IFREG | 0o640).to_string(), "-rw-r-----");
    }

    #[test]
    fn test_is_dir() {
        assert!(Mode::directory(0o700).is_dir());
        assert!(!Mode::new(S_IFREG | 0o700).is_dir());
        assert_eq!(Mode::directory(0o40755).permissions(), 0o755);
    }
}
