use crate::utils::{
    CommandRunner, ExecutableResolver, HostFs, LocalFs, PathResolver, SystemCommandRunner,
};

/// Host services the ISO capability runs against.
///
/// Production code uses [`HostEnv::system`]; tests hand in their own
/// collaborators through [`HostEnv::new`].
pub struct HostEnv {
    runner: Box<dyn CommandRunner>,
    resolver: Box<dyn ExecutableResolver>,
    fs: Box<dyn HostFs>,
}

impl HostEnv {
    pub fn new(
        runner: Box<dyn CommandRunner>,
        resolver: Box<dyn ExecutableResolver>,
        fs: Box<dyn HostFs>,
    ) -> Self {
        Self {
            runner,
            resolver,
            fs,
        }
    }

    pub fn system() -> Self {
        Self::new(
            Box::new(SystemCommandRunner),
            Box::new(PathResolver::new()),
            Box::new(LocalFs::new()),
        )
    }

    pub fn runner(&self) -> &dyn CommandRunner {
        self.runner.as_ref()
    }

    pub fn resolver(&self) -> &dyn ExecutableResolver {
        self.resolver.as_ref()
    }

    pub fn fs(&self) -> &dyn HostFs {
        self.fs.as_ref()
    }
}

impl Default for HostEnv {
    fn default() -> Self {
        Self::system()
    }
}
