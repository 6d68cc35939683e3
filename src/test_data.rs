#[cfg(test)]
pub const POST_DATA: &str = "---
layout: ../layouts/PostDetails.astro
title: What I learned after 20+ years of software development
pubDatetime: 2022-04-02T12:05:00Z
modDatetime: 2024-02-12T22:54:00Z
slug: what-i-learned
tags:
  - engineering
  - career
description: A list of what I try to do myself, for the engineer I wish I had met 20 years ago.
---

How to be a great software engineer?

Someone asked me this question today and I didn\u{2019}t have an answer. After thinking for a while, I came up with a list of what I try to do myself.

Disclaimer: I don't think I am a great engineer, but I would love to have listened to that myself when I started my career, over 20 years ago.

I will divide this in parts, non-technical and technical
";

#[cfg(test)]
pub const DRAFT_DATA: &str = "---
layout: ../layouts/PostDetails.astro
title: Creating a daemon in SystemD
pubDatetime: 2024-02-16T09:30:00Z
draft: true
tags:
  - linux
description: So, you created your awesome server-side application and you are ready to start using it.
---

So, you created your awesome server-side application and you are ready to start using it.
";
