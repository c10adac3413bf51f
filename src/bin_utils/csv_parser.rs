use std::io::Read;

use crate::{account::AccountId, command::OperationKind};
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::{Deserialize, de::DeserializeOwned};

#[derive(Debug, Deserialize)]
pub struct AccountRow {
    pub id: AccountId,
    pub email: String,
    pub balance: Decimal,
    pub withdrawn: Decimal,
    pub paid_in: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct OperationRow {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub from: AccountId,
    pub to: Option<AccountId>,
    pub amount: Option<Decimal>,
}

/// Parses rows of CSV with a header line, yielding each row with its line
/// number.
pub struct CsvParser<R, T> {
    iter: DeserializeRecordsIntoIter<R, T>,
}

impl<R, T> CsvParser<R, T>
where
    R: Read,
    T: DeserializeOwned,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R, T> Iterator for CsvParser<R, T>
where
    R: Read,
    T: DeserializeOwned,
{
    type Item = csv::Result<(u64, T)>;

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| row.map(|row| (curr_line, row)))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn parse_operations() {
        let input = "type,from,to,amount
withdraw, 00000000-0000-0000-0000-000000000001, , 2.5
transfer,00000000-0000-0000-0000-000000000001,00000000-0000-0000-0000-000000000002,
";
        let rows: Vec<_> = CsvParser::<_, OperationRow>::new(input.as_bytes())
            .collect::<csv::Result<_>>()
            .unwrap();
        assert_eq!(rows.len(), 2);

        let (_, withdraw) = &rows[0];
        assert_eq!(withdraw.kind, OperationKind::Withdraw);
        assert_eq!(withdraw.from, Uuid::from_u128(1));
        assert_eq!(withdraw.to, None);
        assert_eq!(withdraw.amount, Some(dec!(2.5)));

        let (_, transfer) = &rows[1];
        assert_eq!(transfer.kind, OperationKind::Transfer);
        assert_eq!(transfer.to, Some(Uuid::from_u128(2)));
        assert_eq!(transfer.amount, None);
    }

    #[test]
    fn malformed_row_is_an_error() {
        let input = "id,email,balance,withdrawn,paid_in
not-a-uuid,a@email.com,1,0,0
";
        let mut parser = CsvParser::<_, AccountRow>::new(input.as_bytes());
        assert!(parser.next().unwrap().is_err());
    }
}
