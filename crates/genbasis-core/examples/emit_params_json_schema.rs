use genbasis_core::params_json_schema;

fn main() {
    let schema = params_json_schema();
    let json = serde_json::to_string_pretty(&schema).expect("serialize params json schema");
    println!("{json}");
}
