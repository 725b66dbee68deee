#[macro_export]
macro_rules! chain {
    ($name:expr, [ $($rule:expr),* $(,)? ]) => {
        $crate::chain($name, vec![ $($crate::IntoRule::into_rule($rule)),* ])
    };
}

#[macro_export]
macro_rules! either {
    ($name:expr, [ $($rule:expr),* $(,)? ]) => {
        $crate::either($name, vec![ $($crate::IntoRule::into_rule($rule)),* ])
    };
}
