table! {
    categories (id) {
        id -> Int4,
        #[sql_name = "type"]
        type_ -> Text,
    }
}

table! {
    questions (id) {
        id -> Int4,
        question -> Text,
        answer -> Text,
        category -> Text,
        difficulty -> Int4,
    }
}

allow_tables_to_appear_in_same_query!(categories, questions,);
