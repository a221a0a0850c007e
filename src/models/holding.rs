use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Getters, new)]
pub struct Holding {
    ticker: String,
    avg_price: Decimal,
    quantity: Decimal,
}

impl Holding {
    pub fn investment(&self) -> Decimal {
        self.avg_price * self.quantity
    }
}
