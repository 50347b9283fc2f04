//! 测试用的 `.mo` 目录构造工具

use std::fs;
use std::path::{Path, PathBuf};

const MO_MAGIC: u32 = 0x9504_12de;
const HEADER: &str = "Content-Type: text/plain; charset=UTF-8\n\
                      Plural-Forms: nplurals=2; plural=(n != 1);\n";

/// 生成一个小端序的 `.mo` 文件内容
pub fn mo_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut all: Vec<(&str, &str)> = vec![("", HEADER)];
    all.extend_from_slice(entries);
    all.sort_by(|a, b| a.0.cmp(b.0));

    let count = all.len() as u32;
    let orig_table = 28u32;
    let trans_table = orig_table + 8 * count;
    let mut data_offset = trans_table + 8 * count;

    let mut tables = Vec::new();
    let mut data = Vec::new();
    for strings in [
        all.iter().map(|e| e.0).collect::<Vec<_>>(),
        all.iter().map(|e| e.1).collect::<Vec<_>>(),
    ] {
        for s in strings {
            tables.extend_from_slice(&(s.len() as u32).to_le_bytes());
            tables.extend_from_slice(&data_offset.to_le_bytes());
            data.extend_from_slice(s.as_bytes());
            data.push(0);
            data_offset += s.len() as u32 + 1;
        }
    }

    let mut out = Vec::new();
    for word in [MO_MAGIC, 0, count, orig_table, trans_table, 0, trans_table + 8 * count] {
        out.extend_from_slice(&word.to_le_bytes());
    }
    out.extend(tables);
    out.extend(data);
    out
}

/// 在 `<root>/<locale>/LC_MESSAGES/<domain>.mo` 写入目录文件
pub fn write_catalog(root: &Path, locale: &str, domain: &str, entries: &[(&str, &str)]) -> PathBuf {
    let dir = root.join(locale).join("LC_MESSAGES");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{domain}.mo"));
    fs::write(&path, mo_bytes(entries)).unwrap();
    path
}
