//! Price rendering. Prices are stored as integer cents and formatted for
//! display only at the response boundary.

pub fn display_price(price_in_cents: i64) -> String {
    let dollars = price_in_cents / 100;
    let cents = price_in_cents % 100;

    format!("{}.{:02}", dollars, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_price() {
        assert_eq!(display_price(0), "0.00");
        assert_eq!(display_price(5), "0.05");
        assert_eq!(display_price(100), "1.00");
        assert_eq!(display_price(129_999), "1299.99");
    }
}
