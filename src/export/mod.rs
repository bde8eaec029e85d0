// ==========================================
// 资源生物经济引擎 - 导出层
// ==========================================
// 职责: 将分析报告写出为 CSV 表与 JSON 文档
// ==========================================

pub mod csv_exporter;
pub mod error;

pub use csv_exporter::{default_output_dir, CsvExporter, ExportSummary, OUTPUT_DIR_ENV};
pub use error::{ExportError, ExportResult};
