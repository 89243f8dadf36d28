/// Implement an operator trait (and its `*Assign` sibling) from std::ops for every combination of
/// owned and borrowed operands.
///
/// Generic parameters of the impls are given in the leading brackets, e.g. `[R: Float]`; use `[]`
/// for none. `$act` is expanded once per combination, so it must compile with `$lhs` and `$rhs`
/// both owned and borrowed (`rhs.to_owned()` is the usual trick).
#[macro_export]
macro_rules! impl_op {
  // Implement $Op for each pair in [($Lhs, $Rhs), ($Lhs, &$Rhs), (&$Lhs, $Rhs), (&$Lhs, &$Rhs)]
  (. [$($gen:tt)*] $Op:ident, $op:ident -> $Result:ty;
    $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty;
    $act:expr) => {
      impl<$($gen)*> $Op<$Rhs> for $Lhs {
          type Output = $Result;
          #[inline]
          fn $op($lhs, $rhs: $Rhs) -> Self::Output {
              $act
          }
      }
      impl<$($gen)*> $Op<$Rhs> for &$Lhs {
          type Output = $Result;
          #[inline]
          fn $op($lhs, $rhs: $Rhs) -> Self::Output {
              $act
          }
      }
      impl<$($gen)*> $Op<&$Rhs> for $Lhs {
          type Output = $Result;
          #[inline]
          fn $op($lhs, $rhs: &$Rhs) -> Self::Output {
              $act
          }
      }
      impl<$($gen)*> $Op<&$Rhs> for &$Lhs {
          type Output = $Result;
          #[inline]
          fn $op($lhs, $rhs: &$Rhs) -> Self::Output {
              $act
          }
      }
  };
  // Implement $OpAssign for $Lhs over [$Rhs, &$Rhs]
  (= [$($gen:tt)*] $Assign:ident, $assign:ident;
    $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty;
    $act:expr) => {
      impl<$($gen)*> $Assign<$Rhs> for $Lhs {
          #[inline]
          fn $assign(&mut $lhs, $rhs: $Rhs) {
              $act
          }
      }
      impl<$($gen)*> $Assign<&$Rhs> for $Lhs {
          #[inline]
          fn $assign(&mut $lhs, $rhs: &$Rhs) {
              $act
          }
      }
  };
  // Both of the above, where the output type is $Lhs.
  ([$($gen:tt)*] $Op:ident, $op:ident, $Assign:ident, $assign:ident;
    $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty;
    $op_act:expr;
    $assign_act:expr
    ) => {
      $crate::impl_op!(. [$($gen)*] $Op, $op -> $Lhs; $lhs: $Lhs, $rhs: $Rhs; $op_act);
      $crate::impl_op!(= [$($gen)*] $Assign, $assign; $lhs: $Lhs, $rhs: $Rhs; $assign_act);
  };
}

/// [impl_op] for `Add` and `Sub`. `Add`, `AddAssign`, `Sub` and `SubAssign` must be in scope.
#[macro_export]
macro_rules! impl_add_sub {
    ([$($gen:tt)*] $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty; ($add:expr; $add_asn:expr); ($sub:expr; $sub_asn:expr)) => {
        $crate::impl_op! {[$($gen)*] Add, add, AddAssign, add_assign; $lhs: $Lhs, $rhs: $Rhs; $add; $add_asn}
        $crate::impl_op! {[$($gen)*] Sub, sub, SubAssign, sub_assign; $lhs: $Lhs, $rhs: $Rhs; $sub; $sub_asn}
    };
}

/// [impl_op] for `Mul` and `Div`. `Mul`, `MulAssign`, `Div` and `DivAssign` must be in scope.
#[macro_export]
macro_rules! impl_mul_div {
    ([$($gen:tt)*] $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty; ($mul:expr; $mul_asn:expr); ($div:expr; $div_asn:expr)) => {
        $crate::impl_op! {[$($gen)*] Mul, mul, MulAssign, mul_assign; $lhs: $Lhs, $rhs: $Rhs; $mul; $mul_asn}
        $crate::impl_op! {[$($gen)*] Div, div, DivAssign, div_assign; $lhs: $Lhs, $rhs: $Rhs; $div; $div_asn}
    };
}
