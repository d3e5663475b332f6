// ==========================================
// V-Replenishment 补货清单生成器 - 文件解析器实现
// ==========================================
// 职责: 文件读取与解析 → RawRecord 序列
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use crate::domain::record::{CellValue, RawRecord};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;
use tracing::debug;

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录（完全空白的行会被跳过）
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>>;
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ImportError::FileNotFound(path.display().to_string()))
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 根据表头行检测分隔符
    ///
    /// 制表符多于逗号和分号时用制表符;分号多于逗号时用分号;否则用逗号
    pub fn detect_delimiter(header_line: &str) -> u8 {
        let count = |c: char| header_line.matches(c).count();
        let (commas, semicolons, tabs) = (count(','), count(';'), count('\t'));

        if tabs > commas && tabs > semicolons {
            b'\t'
        } else if semicolons > commas {
            b';'
        } else {
            b','
        }
    }

    /// 从文本解析（文件读取之后的纯解析步骤）
    pub fn parse_text(&self, text: &str) -> ImportResult<Vec<RawRecord>> {
        let text = text.trim_start_matches('\u{feff}');
        let header_line = match text.lines().find(|line| !line.trim().is_empty()) {
            Some(line) => line,
            None => return Ok(Vec::new()),
        };
        let delimiter = Self::detect_delimiter(header_line);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .flexible(true) // 允许行长度不一致
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let record: RawRecord = headers
                .iter()
                .zip(row.iter())
                .map(|(header, value)| (header.clone(), value.to_string()))
                .collect();

            // 跳过完全空白的行
            if record.is_blank() {
                continue;
            }
            records.push(record);
        }

        debug!(rows = records.len(), delimiter = ?(delimiter as char), "CSV 解析完成");
        Ok(records)
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let bytes = fs::read(file_path)?;
        let text = String::from_utf8_lossy(&bytes);
        self.parse_text(&text)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    fn to_cell_value(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Blank,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.trim().to_string()),
            other => CellValue::Text(other.to_string().trim().to_string()),
        }
    }
}

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 只读取第一个工作表
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let mut rows = range.rows();
        let header_row = match rows.next() {
            Some(row) => row,
            None => return Ok(Vec::new()),
        };

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut records = Vec::new();
        for data_row in rows {
            let record: RawRecord = headers
                .iter()
                .zip(data_row.iter())
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header.clone(), Self::to_cell_value(cell)))
                .collect();

            // 跳过完全空白的行
            if record.is_blank() {
                continue;
            }
            records.push(record);
        }

        debug!(sheet = %sheet_name, rows = records.len(), "Excel 解析完成");
        Ok(records)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRecord>> {
        let path = file_path.as_ref();

        match extension_of(path).as_str() {
            "csv" => CsvParser.parse_to_raw_records(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_records(path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}
