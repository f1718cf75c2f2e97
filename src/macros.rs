#[macro_export]
macro_rules! regex {
    ($pat:expr) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        stage: $stage:expr,
        pattern: $pat:expr
        $(, unless: [ $($unless:expr),* $(,)? ])?
        , confidence: $confidence:expr
        $(, buckets: $buckets:expr)?
        $(, priority: $priority:expr)?
        , prod: |$caps:ident : &Captures| -> $ret_ty:ty $body_expr:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            stage: $stage,
            pattern: $pat,
            suppressed_by: vec![ $($($unless),*)? ],
            confidence: $confidence,
            production: Box::new(move |$caps: &regex::Captures<'_>| {
                let result: $ret_ty = $body_expr;
                result
            }),
            buckets: { 0 $(| $buckets)? },
            priority: { 0 $(+ $priority)? },
        }
    }};
}
