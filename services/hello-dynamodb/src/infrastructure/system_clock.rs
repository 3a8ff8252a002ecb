use chrono::{Local, NaiveDateTime};

use crate::domain::Clock;

/// システムの壁時計を参照する時刻ソース
///
/// ローカルタイムゾーン（`TZ`環境変数、Lambda上ではUTC）の時刻を返す。
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
