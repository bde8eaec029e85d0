// ==========================================
// 资源生物经济引擎 - 外部环境数据层
// ==========================================
// 职责: 接收外部地理空间平台的标量统计,生成模型因子
// 红线: 缺测只降级,不致命
// ==========================================

pub mod error;
pub mod factors;
pub mod resolver;
pub mod source;

// 重导出核心类型
pub use error::{EnvironmentError, EnvironmentResult};
pub use factors::EnvironmentalFactorDeriver;
pub use resolver::EnvironmentResolver;
pub use source::{
    EnvironmentalDataSource, StaticEnvironmentalSource, UnavailableEnvironmentalSource,
};
