diesel::table! {
    orders (id) {
        id -> BigInt,
        items -> Text,
        total -> Double,
    }
}

diesel::table! {
    products (id) {
        id -> BigInt,
        name -> Text,
        price -> Double,
        image -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(orders, products,);
