use dynsql_core::Condition;

fn main() {
    let _half: Condition<i32> = Condition::between(5);
}
