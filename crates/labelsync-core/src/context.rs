use labelsync_config::Config;
use labelsync_ghapi_interface::ApiService;
use labelsync_source::SourceService;

use crate::{random::RandomSource, CoreModule};

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub source_service: &'a (dyn SourceService + 'a),
    pub random_source: &'a (dyn RandomSource + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use labelsync_config::Config;
    use labelsync_ghapi_interface::MockApiService;
    use labelsync_source::MockSourceService;

    use crate::{random::MockRandomSource, CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub source_service: MockSourceService,
        pub random_source: MockRandomSource,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::from_defaults_no_version(),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                source_service: MockSourceService::new(),
                random_source: MockRandomSource::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                source_service: &self.source_service,
                random_source: &self.random_source,
            }
        }
    }
}
