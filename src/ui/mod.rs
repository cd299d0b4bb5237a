//! Leptos components and browser adapters for the landing page.

pub mod pages;

#[cfg(not(feature = "ssr"))]
pub mod behavior;
#[cfg(not(feature = "ssr"))]
pub mod stage;
#[cfg(not(feature = "ssr"))]
pub mod visibility;
