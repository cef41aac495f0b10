use quickcheck::{Arbitrary, Gen};
use rust_decimal::Decimal;

use crate::{
    Number, Value,
    value::{Array, Map},
};

impl Arbitrary for Number {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 5 {
            0 => Number::from(i64::arbitrary(g)),
            1 => Number::from(u64::arbitrary(g)),
            2 => Number::from(i128::arbitrary(g)),
            3 => {
                // Non-finite floats would break tree equality via NaN.
                let mut value = f64::arbitrary(g);
                while !value.is_finite() {
                    value = f64::arbitrary(g);
                }
                Number::Float(value)
            }
            _ => Number::Decimal(Decimal::new(i64::arbitrary(g), u32::arbitrary(g) % 29)),
        }
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            if depth == 0 {
                match usize::arbitrary(g) % 4 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(Number::arbitrary(g)),
                    _ => Value::String(String::arbitrary(g)),
                }
            } else {
                match usize::arbitrary(g) % 6 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(Number::arbitrary(g)),
                    3 => Value::String(String::arbitrary(g)),
                    4 => {
                        let len = usize::arbitrary(g) % 3;
                        let mut items = Array::new();
                        for _ in 0..len {
                            items.push(gen_val(g, depth - 1));
                        }
                        Value::Array(items)
                    }
                    _ => {
                        let len = usize::arbitrary(g) % 3;
                        let mut map = Map::new();
                        for _ in 0..len {
                            map.insert(String::arbitrary(g), gen_val(g, depth - 1));
                        }
                        Value::Object(map)
                    }
                }
            }
        }

        let depth = usize::arbitrary(g) % 3;
        gen_val(g, depth)
    }
}
