// SPDX-FileCopyrightText: The formula-fixtures authors
// SPDX-License-Identifier: MPL-2.0

//! # Uniform cumulative B-spline for SO(3) of order N
//!
//! Prose-only fixture: display math embedded in module documentation,
//! with no callable items attached. A formula renderer must pick these
//! blocks up from the module text alone.
//!
//! In the particular case of scalar values and order $N = 5$, for a time
//! $$t \in [t_i, t_{i+1})$$ the value of $$p(t)$$ depends only on the 5
//! control points at $$[t_i, t_{i+1}, t_{i+2}, t_{i+3}, t_{i+4}]$$. Time
//! is transformed to the uniform representation $$s(t) = (t - t_0)/\Delta
//! t$$, such that control points transform into $$s_i \in [0,..,N]$$, and
//! $$u(t) = s(t) - s_i$$ is the time since the start of the segment.
//! Following the cumulative matrix representation of the De Boor–Cox
//! formula, the value of the function is evaluated as follows:
//! $$\begin{align}
//!    R(u(t)) &= R_i
//!    \prod_{j=1}^{4}{\exp(k_{j}\log{(R_{i+j-1}^{-1}R_{i+j})})},
//!    \\ \begin{pmatrix} k_0 \\ k_1 \\ k_2 \\ k_3 \\ k_4 \end{pmatrix}^T &=
//!    M_{c5} \begin{pmatrix} 1 \\ u \\ u^2 \\ u^3 \\ u^4
//!    \end{pmatrix},
//! \end{align}$$
//! where $$R_{i} \in SO(3)$$ are knots and $$M_{c5}$$ is the cumulative
//! blending matrix $$\begin{align}
//!    M_{c5} = \frac{1}{4!}
//!    \begin{pmatrix} 24 & 0 & 0 & 0 & 0 \\ 23 & 4 & -6 & 4 & -1 \\ 12 & 16 & 0
//!    & -8 & 3 \\ 1 & 4 & 6 & 4 & -3 \\ 0 & 0 & 0 & 0 & 1 \end{pmatrix}.
//! \end{align}$$
//!
//! Nothing in this crate evaluates the spline; the formulas are rendering
//! input only.
