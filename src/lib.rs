#![doc = include_str!("../README.md")]

extern crate alloc;

mod component;
mod config;
mod demo;
mod document;
mod element;
mod error;
mod mount;
mod render;
pub mod testing;

pub use self::{
    component::{
        CDN_URL, Component, PromotedLabel, Restaurant, RestaurantCard, RestaurantCardProps,
        RestaurantInfo, Sla, with_promoted_label,
    },
    config::{
        Config, ConfigError, DEFAULT_CONTAINER_ID, DEFAULT_DOCUMENT, SerializableConfig,
        compile_config, read_config,
    },
    demo::{Example, heading, parent},
    document::{Document, DocumentError, dom},
    element::{AttributeValue, Children, Element, Node, create_element},
    error::Error,
    mount::{MountError, Root, mount},
    render::{RenderFormat, render_element},
};
