#![warn(clippy::uninlined_format_args)]

//! English by default; the `ja` feature switches every reply to Japanese.

use std::fmt::Display;

#[cfg(feature = "ja")]
pub mod strings {
    pub const TOTAL: &str = "合計";
    pub const NOTHING_TO_SETTLE: &str = "精算の必要はありません。";
    pub const SETTLEMENT_FAILED: &str = "精算の計算に失敗しました";
    pub const NO_PARTICIPANTS: &str = "参加者がいません。先に参加してください。";
    pub const UNKNOWN_EVENT: &str = "イベントを特定できませんでした";
    pub const UNKNOWN_PAYER: &str = "支払者を特定できませんでした";
    pub const STORAGE_FAILED: &str = "データの保存に失敗しました";
    pub const AMOUNT_TOO_LARGE: &str = "金額が大きすぎます";
    pub const AMOUNT_INVALID: &str = "金額が不正です";
    pub const EMPTY_COMMAND: &str = "コマンドが空です。";
    pub const HELP: &str = "\
使い方:
  <金額>        立て替えた金額を登録します (例: 1,000円)
  参加          割り勘に参加します
  精算          精算方法を表示します
  取消 <id>     登録した支払いを取り消します
  ヘルプ        この説明を表示します";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const TOTAL: &str = "Total";
    pub const NOTHING_TO_SETTLE: &str = "Nothing to settle.";
    pub const SETTLEMENT_FAILED: &str = "Settlement calculation failed";
    pub const NO_PARTICIPANTS: &str = "Nobody has joined yet. Join first.";
    pub const UNKNOWN_EVENT: &str = "Could not identify the event";
    pub const UNKNOWN_PAYER: &str = "Could not identify the payer";
    pub const STORAGE_FAILED: &str = "Failed to store data";
    pub const AMOUNT_TOO_LARGE: &str = "Amount is too large";
    pub const AMOUNT_INVALID: &str = "Amount is invalid";
    pub const EMPTY_COMMAND: &str = "Command is empty.";
    pub const HELP: &str = "\
Usage:
  <amount>       record an amount you paid for the group (e.g. 1,000)
  join           join the split
  settle         show who pays whom
  delete <id>    cancel a recorded payment
  help           show this message";
}

pub use strings::*;

/// Groups digits by thousands: `1234567` becomes `1,234,567`.
pub fn group_digits(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(feature = "ja")]
pub fn format_yen(amount: i64) -> String {
    format!("{}円", group_digits(amount))
}

#[cfg(not(feature = "ja"))]
pub fn format_yen(amount: i64) -> String {
    format!("¥{}", group_digits(amount))
}

#[cfg(feature = "ja")]
pub fn payment_registered(mention: impl Display, amount: i64, id: impl Display) -> String {
    format!("{mention}さんが{}立て替えました！ (id: {id})", format_yen(amount))
}

#[cfg(not(feature = "ja"))]
pub fn payment_registered(mention: impl Display, amount: i64, id: impl Display) -> String {
    format!("{mention} paid {} for the group! (id: {id})", format_yen(amount))
}

#[cfg(feature = "ja")]
pub fn joined(mention: impl Display) -> String {
    format!("{mention}さんが参加しました！")
}

#[cfg(not(feature = "ja"))]
pub fn joined(mention: impl Display) -> String {
    format!("{mention} joined!")
}

#[cfg(feature = "ja")]
pub fn already_joined(mention: impl Display) -> String {
    format!("{mention}さんは既に参加しています")
}

#[cfg(not(feature = "ja"))]
pub fn already_joined(mention: impl Display) -> String {
    format!("{mention} has already joined")
}

#[cfg(feature = "ja")]
pub fn payment_deleted(id: impl Display) -> String {
    format!("支払い {id} を取り消しました")
}

#[cfg(not(feature = "ja"))]
pub fn payment_deleted(id: impl Display) -> String {
    format!("Payment {id} was deleted")
}

#[cfg(feature = "ja")]
pub fn payment_not_found(id: impl Display) -> String {
    format!("このイベントに支払い {id} は見つかりませんでした")
}

#[cfg(not(feature = "ja"))]
pub fn payment_not_found(id: impl Display) -> String {
    format!("No payment {id} in this event")
}

#[cfg(feature = "ja")]
pub fn invalid_argument(text: impl Display) -> String {
    format!("「{text}」は解釈できませんでした。`ヘルプ` で使い方を確認してください。")
}

#[cfg(not(feature = "ja"))]
pub fn invalid_argument(text: impl Display) -> String {
    format!("Could not understand '{text}'. Try `help`.")
}

#[cfg(feature = "ja")]
pub fn invalid_payment_id(id: impl Display) -> String {
    format!("支払いID '{id}' が不正です")
}

#[cfg(not(feature = "ja"))]
pub fn invalid_payment_id(id: impl Display) -> String {
    format!("Invalid payment id '{id}'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, "0")]
    #[case::three_digits(999, "999")]
    #[case::thousand(1000, "1,000")]
    #[case::millions(12_345_678, "12,345,678")]
    #[case::negative(-1500, "-1,500")]
    #[case::max(i64::MAX, "9,223,372,036,854,775,807")]
    #[case::min(i64::MIN, "-9,223,372,036,854,775,808")]
    fn groups_digits_by_thousands(#[case] amount: i64, #[case] expected: &str) {
        assert_eq!(group_digits(amount), expected);
    }

    #[test]
    fn formatted_yen_keeps_grouping() {
        assert!(format_yen(1000).contains("1,000"));
    }

    #[cfg(not(feature = "ja"))]
    #[test]
    fn english_is_selected_without_the_ja_feature() {
        assert_eq!(format_yen(1000), "¥1,000");
        assert_eq!(joined("<@U1>"), "<@U1> joined!");
        assert_eq!(TOTAL, "Total");
    }

    #[cfg(feature = "ja")]
    #[test]
    fn japanese_messages_use_yen_suffix() {
        assert_eq!(format_yen(1000), "1,000円");
        assert_eq!(
            payment_registered("<@U1>", 1000, "abc"),
            "<@U1>さんが1,000円立て替えました！ (id: abc)"
        );
        assert_eq!(joined("<@U1>"), "<@U1>さんが参加しました！");
    }
}
