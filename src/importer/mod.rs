// ==========================================
// V-Replenishment 补货清单生成器 - 导入层
// ==========================================
// 职责: 外部数据 → RawRecord,字段别名解析,数值清洗,格式校验
// 支持: Excel, CSV
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod format_validator;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{resolve, AliasTable, FieldMapper, LogicalField};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
pub use format_validator::FormatValidator;
