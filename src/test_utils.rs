#[cfg(test)]
pub mod fixtures {
    use crate::discovery::{MountEntry, MountProbe};
    use crate::types::Mode;
    use std::cell::RefCell;
    use std::io;
    use std::path::{Path, PathBuf};

    /// How one fake mount answers each probe.
    #[derive(Debug, Clone)]
    pub struct FakeMount {
        pub stat: Result<Mode, io::ErrorKind>,
        pub list: Result<usize, io::ErrorKind>,
        pub traverse: Result<(), io::ErrorKind>,
    }

    impl FakeMount {
        pub fn listable(perms: u32) -> Self {
            Self {
                stat: Ok(Mode::directory(perms)),
                list: Ok(3),
                traverse: Ok(()),
            }
        }

        /// `o-r`: listing refused, traversal allowed.
        pub fn obscured(perms: u32) -> Self {
            Self {
                stat: Ok(Mode::directory(perms)),
                list: Err(io::ErrorKind::PermissionDenied),
                traverse: Ok(()),
            }
        }

        pub fn locked(perms: u32) -> Self {
            Self {
                stat: Ok(Mode::directory(perms)),
                list: Err(io::ErrorKind::PermissionDenied),
                traverse: Err(io::ErrorKind::PermissionDenied),
            }
        }

        pub fn unexported() -> Self {
            Self {
                stat: Err(io::ErrorKind::NotFound),
                list: Err(io::ErrorKind::NotFound),
                traverse: Err(io::ErrorKind::NotFound),
            }
        }

        pub fn with_list(mut self, list: Result<usize, io::ErrorKind>) -> Self {
            self.list = list;
            self
        }

        pub fn with_traverse(mut self, traverse: Result<(), io::ErrorKind>) -> Self {
            self.traverse = traverse;
            self
        }
    }

    /// In-memory [`MountProbe`] that also logs which probes ran.
    #[derive(Debug, Default)]
    pub struct FakeProbe {
        root: PathBuf,
        mounts: Vec<(String, FakeMount)>,
        pub enumerate_error: Option<io::ErrorKind>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeProbe {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self {
                root: root.into(),
                ..Self::default()
            }
        }

        pub fn with_mount(mut self, name: &str, mount: FakeMount) -> Self {
            self.mounts.push((name.to_string(), mount));
            self
        }

        /// Probe calls in order, e.g. `"list /nfs/a"`.
        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn lookup(&self, op: &str, path: &Path) -> &FakeMount {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", op, path.display()));
            self.mounts
                .iter()
                .find(|(name, _)| self.root.join(name) == path)
                .map(|(_, mount)| mount)
                .unwrap_or_else(|| panic!("unexpected probe of {}", path.display()))
        }
    }

    impl MountProbe for FakeProbe {
        fn mounts(&self, root: &Path) -> io::Result<Vec<MountEntry>> {
            if let Some(kind) = self.enumerate_error {
                return Err(io::Error::from(kind));
            }
            Ok(self
                .mounts
                .iter()
                .map(|(name, _)| MountEntry::new(name.as_str(), root.join(name)))
                .collect())
        }

        fn stat(&self, path: &Path) -> io::Result<Mode> {
            self.lookup("stat", path).stat.map_err(io::Error::from)
        }

        fn list(&self, path: &Path) -> io::Result<usize> {
            self.lookup("list", path).list.map_err(io::Error::from)
        }

        fn traverse(&self, path: &Path) -> io::Result<()> {
            self.lookup("traverse", path).traverse.map_err(io::Error::from)
        }
    }
}
