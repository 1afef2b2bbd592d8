//! Cálculo del valor total de un alquiler
//!
//! El total se deriva del número de días entre la retirada y la
//! devolución prevista, redondeado hacia arriba, por la tarifa diaria.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Número de días facturables entre dos fechas (techo de la diferencia).
/// Una diferencia nula o negativa cuenta como cero días.
pub fn billable_days(pickup: DateTime<Utc>, expected_return: DateTime<Utc>) -> i64 {
    let millis = (expected_return - pickup).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Valor total del alquiler: días facturables por tarifa diaria.
pub fn calculate_total_charge(
    pickup: DateTime<Utc>,
    expected_return: DateTime<Utc>,
    daily_rate: Decimal,
) -> Decimal {
    let days = billable_days(pickup, expected_return);
    if days == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(days) * daily_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn datetime(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_tres_dias_completos() {
        let total = calculate_total_charge(
            datetime("2025-01-01T00:00:00Z"),
            datetime("2025-01-04T00:00:00Z"),
            Decimal::new(10000, 2),
        );
        assert_eq!(total, Decimal::new(30000, 2));
    }

    #[test]
    fn test_mismo_dia_total_cero() {
        let pickup = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let total = calculate_total_charge(pickup, pickup, Decimal::new(10000, 2));
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_dia_parcial_redondea_hacia_arriba() {
        let total = calculate_total_charge(
            datetime("2025-01-01T00:00:00Z"),
            datetime("2025-01-02T12:00:00Z"),
            Decimal::new(10000, 2),
        );
        // Un día y medio se factura como dos días
        assert_eq!(total, Decimal::new(20000, 2));
    }

    #[test]
    fn test_devolucion_anterior_total_cero() {
        let total = calculate_total_charge(
            datetime("2025-01-04T00:00:00Z"),
            datetime("2025-01-01T00:00:00Z"),
            Decimal::new(10000, 2),
        );
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_billable_days() {
        assert_eq!(
            billable_days(
                datetime("2025-01-01T00:00:00Z"),
                datetime("2025-01-08T00:00:00Z")
            ),
            7
        );
        assert_eq!(
            billable_days(
                datetime("2025-01-01T10:00:00Z"),
                datetime("2025-01-01T11:00:00Z")
            ),
            1
        );
    }
}
