//! Ports - 外部とのインターフェース
//!
//! 時刻・ID 生成・結果の書き出し先を trait として切り出し、
//! テストや CLI から差し替えられるようにしています。

pub mod clock;
pub mod id_generator;
pub mod sink;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::sink::RowSink;
