//! RowSink port - 結果テーブルの書き出し先
//!
//! core は行を順番に渡すだけで、書き出し先から何かを読み戻すことはありません。
//! ファイルへの書き出しは CLI 側の実装が担当します。

use crate::domain::{ResultRow, SimError};

/// Accepts result rows of one table, in production order.
pub trait RowSink {
    fn write_row(&mut self, row: ResultRow) -> Result<(), SimError>;
}

impl RowSink for Vec<ResultRow> {
    fn write_row(&mut self, row: ResultRow) -> Result<(), SimError> {
        self.push(row);
        Ok(())
    }
}

impl<S: RowSink + ?Sized> RowSink for &mut S {
    fn write_row(&mut self, row: ResultRow) -> Result<(), SimError> {
        (**self).write_row(row)
    }
}
