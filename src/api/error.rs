// ==========================================
// V-Replenishment 补货清单生成器 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换导入层错误为用户可理解的错误消息
// ==========================================

use crate::domain::types::DatasetKind;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 数据集错误（可恢复: 重新提供数据集即可）
    // ==========================================
    #[error("请检查数据格式: {}", format_datasets(.datasets))]
    InvalidDatasetFormat { datasets: Vec<DatasetKind> },

    #[error("数据集未加载: {}", .0.label())]
    DatasetNotLoaded(DatasetKind),

    #[error("尚未生成补货清单")]
    NotProcessed,

    // ==========================================
    // 导入错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),
}

fn format_datasets(datasets: &[DatasetKind]) -> String {
    datasets
        .iter()
        .map(DatasetKind::label)
        .collect::<Vec<_>>()
        .join(", ")
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::InvalidDatasetFormat { datasets } => {
                ApiError::InvalidDatasetFormat { datasets }
            }
            ImportError::ConfigReadError { .. } | ImportError::ConfigValueError { .. } => {
                ApiError::ConfigError(err.to_string())
            }
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
