table! {
    laboratories (id) {
        id -> Int4,
        name -> Text,
        pricing -> Float8,
        rating -> Float8,
        postal_code -> Text,
        image_url -> Text,
        google_link -> Text,
        created_at -> Timestamp,
    }
}
