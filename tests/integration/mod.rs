// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod gateway_test;
mod helpers;
mod scan_pipeline_test;
