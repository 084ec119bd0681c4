//! Built-in scenario definitions.
//!
//! Provides the system-defined confrontation scenarios that ship with the
//! application. The surrounding application may replace them with a custom
//! catalog file; these are the fallback set.

use super::model::ScenarioDefinition;

fn scenario(
    id: &str,
    title: &str,
    description: &str,
    character: &str,
    initial_message: &str,
) -> ScenarioDefinition {
    ScenarioDefinition {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        character: character.to_string(),
        initial_message: initial_message.to_string(),
    }
}

/// Returns the built-in scenario definitions, in menu order.
///
/// Each scenario pits the user against an unreasonable counterpart in an
/// everyday conflict, from noisy neighbors to coworkers taking credit.
pub fn get_default_scenarios() -> Vec<ScenarioDefinition> {
    vec![
        scenario(
            "noisy-neighbor",
            "楼上邻居小孩制造噪音，家长视而不见",
            "周末早上7点，楼上又开始了噪音污染。小孩在上面跑跳，敲打地板，尖叫不止，而家长完全不管不顾。今天你决定上门理论...",
            "邻居家长",
            "有什么事吗？我们家孩子只是在正常玩耍而已。",
        ),
        scenario(
            "queue-jumper",
            "排队时碰到人插队",
            "你排了半小时队，眼看就要到你了，一个人直接插到你前面。你开口制止...",
            "插队者",
            "我就买个东西，很快的，你不介意吧？",
        ),
        scenario(
            "rude-waiter",
            "餐厅服务员态度恶劣",
            "你在餐厅点餐，服务员态度极其恶劣，还把你的要求弄错了。你请他重做...",
            "服务员",
            "你点的就是这个，不要无理取闹。",
        ),
        scenario(
            "loud-phone",
            "图书馆里有人大声打电话",
            "你在图书馆专心学习，旁边突然有人接起电话大声喧哗。你示意他小声...",
            "打电话的人",
            "这是公共场所，我想怎么说话是我的自由。",
        ),
        scenario(
            "parking-spot",
            "别人抢了你的停车位",
            "你找了半天终于看到一个空车位，正准备倒车入位，另一辆车突然从旁边窜出来占了这个位置...",
            "占车位的人",
            "先到先得，你没停进来就不是你的。",
        ),
        scenario(
            "scam-seller",
            "网购收到假货，卖家拒不承认",
            "你在网上买了一个品牌商品，收到后发现是明显的仿冒品。你联系卖家...",
            "卖家",
            "我们卖的都是正品，你是不是眼睛有问题？",
        ),
        scenario(
            "movie-talker",
            "电影院里有人不停说话",
            "你正在专心看一部期待已久的电影，后排有两个人不停地大声交谈，影响了你的观影体验...",
            "说话的观众",
            "我们小声点就是了，至于这么较真吗？",
        ),
        scenario(
            "delivery-damage",
            "快递物品损坏但拒绝赔偿",
            "你收到一个包裹，打开发现里面的物品已经损坏。你联系快递员要求赔偿...",
            "快递员",
            "我送的时候是好的，你自己签收了就是你的责任。",
        ),
        scenario(
            "plane-recliner",
            "飞机上前排座椅猛然后仰",
            "你正在长途飞行中，前排乘客突然将座椅完全后仰，几乎撞到你的膝盖，还把你的饮料撞翻了...",
            "前排乘客",
            "这是我的权利，我想怎么调座椅就怎么调。",
        ),
        scenario(
            "loud-music",
            "邻居深夜播放超大声音乐",
            "已经凌晨1点了，你的邻居还在播放震耳欲聋的音乐，你无法入睡，决定去敲门...",
            "邻居",
            "音乐声很大吗？我都没感觉，再说今天是周末！",
        ),
        scenario(
            "stolen-lunch",
            "公司冰箱里的午餐被偷了",
            "你特意准备的午餐放在公司冰箱里，午休时发现不见了，而同事正在吃着看起来很像你的食物...",
            "同事",
            "这是我自己带的午餐，你肯定是弄错了吧？",
        ),
        scenario(
            "bad-haircut",
            "理发师把你的头发剪糟了还不承认",
            "你向理发师明确表示了你想要的发型，但最终结果和你说的完全不同。更糟的是，理发师觉得这很好看...",
            "理发师",
            "这个发型很适合你啊，比你说的那个好看多了！",
        ),
        scenario(
            "bike-lane-blocked",
            "汽车占用了自行车道",
            "你正在骑自行车，却发现前方的自行车道被一辆汽车霸占了，你不得不绕到马路上，很危险...",
            "汽车司机",
            "我就停一会儿，你骑车绕一下怎么了？",
        ),
        scenario(
            "wifi-thief",
            "邻居偷用你家的Wi-Fi",
            "你最近发现网速变慢，经检查发现是邻居破解了你的Wi-Fi密码并大量下载影片...",
            "邻居",
            "大家都是邻居，用一下你的网络有什么大不了的？",
        ),
        scenario(
            "dirty-public-toilet",
            "公共卫生间使用者不冲水",
            "你进入公共卫生间，发现前一位使用者根本没有冲水就离开了，现在他正准备离开卫生间...",
            "前一位使用者",
            "冲水按钮好像坏了，跟我没关系。",
        ),
        scenario(
            "rain-umbrella",
            "别人的雨伞一直滴水在你身上",
            "在拥挤的公交车上，旁边乘客的雨伞不断滴水在你的鞋子和裤子上，但他毫不在意...",
            "拿伞的乘客",
            "下雨天伞会湿这很正常，你要坐公交就得忍着。",
        ),
        scenario(
            "pet-poop",
            "邻居遛狗不清理便便",
            "你看到邻居的狗在小区草坪上便便，但主人假装没看见准备离开...",
            "狗主人",
            "这是小区公共区域，物业会清理的，你管这么多干什么？",
        ),
        scenario(
            "music-request-rejected",
            "KTV里别人霸占点歌器",
            "在KTV包间里，有人一直霸占着点歌器，连续点了十几首歌，轮不到你点...",
            "霸占者",
            "我付的钱比你多，我有权多点歌，你等着吧。",
        ),
        scenario(
            "smoke-in-elevator",
            "有人在电梯里吸烟",
            "你走进电梯，发现里面有人正在吸烟，尽管电梯里明确标有禁止吸烟的标志...",
            "吸烟者",
            "我就抽一口，这么小气干嘛，又不会憋死你。",
        ),
        scenario(
            "credit-stolen",
            "同事偷了你的工作成果",
            "你辛辛苦苦做的项目成果，在会议上被同事当作自己的工作邀功，领导还表扬了他...",
            "同事",
            "这个方案主要是我做的，你只是帮了一点小忙而已。",
        ),
        scenario(
            "return-rejected",
            "商店拒绝退换有质量问题的商品",
            "你购买的商品使用没多久就出现了质量问题，但商店以\"已经使用过\"为由拒绝退换...",
            "店员",
            "这明显是你使用不当造成的，我们概不负责。",
        ),
        scenario(
            "loud-chewing",
            "有人在安静的场合大声咀嚼食物",
            "你在图书馆或办公室等安静的场合，旁边有人在大声咀嚼零食，发出令人不适的声音...",
            "咀嚼者",
            "我就是这样吃东西的，不喜欢你可以换位置。",
        ),
        scenario(
            "seat-taken",
            "有人占了你预留的座位",
            "你短暂离开座位去洗手间，回来发现有人坐在你的位置上，你的物品被随意移到了一边...",
            "占座者",
            "这里没人，公共场所先到先得。",
        ),
        scenario(
            "group-project-slacker",
            "小组作业有人不出力",
            "在一个重要的小组项目中，有成员几乎不参与任何工作，但最后却想平分成果和荣誉...",
            "偷懒的组员",
            "我们是一个团队，成果当然应该大家分享，何况我也出了不少主意。",
        ),
        scenario(
            "noisy-hotel-neighbor",
            "酒店隔壁房间深夜喧哗",
            "你住在酒店，凌晨两点隔壁房间还在大声说笑、开派对，你敲门请他们安静一点...",
            "隔壁房客",
            "我们花钱住店有权利玩到尽兴，你要睡觉可以戴耳塞啊。",
        ),
        scenario(
            "shared-bill-unfair",
            "AA制吃饭有人点贵的还要平分",
            "和朋友聚餐，说好AA制，但有人点了最贵的菜和酒，最后却坚持要平均分摊账单...",
            "点贵菜的朋友",
            "大家一起吃的，当然要平分账单，这是规矩。",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenarios_count() {
        let scenarios = get_default_scenarios();
        assert_eq!(scenarios.len(), 26, "Expected 26 built-in scenarios");
    }

    #[test]
    fn test_default_scenarios_have_unique_ids() {
        let scenarios = get_default_scenarios();
        let mut ids = std::collections::HashSet::new();
        for scenario in scenarios {
            assert!(
                ids.insert(scenario.id.clone()),
                "Scenario IDs must be unique, found duplicate: {}",
                scenario.id
            );
        }
    }

    #[test]
    fn test_default_scenarios_have_unique_titles() {
        let scenarios = get_default_scenarios();
        let mut titles = std::collections::HashSet::new();
        for scenario in scenarios {
            assert!(
                titles.insert(scenario.title.clone()),
                "Scenario titles must be unique, found duplicate: {}",
                scenario.title
            );
        }
    }

    #[test]
    fn test_noisy_neighbor_scenario_configuration() {
        let scenarios = get_default_scenarios();
        let noisy = scenarios
            .iter()
            .find(|s| s.id == "noisy-neighbor")
            .expect("Noisy neighbor scenario should exist");

        assert_eq!(noisy.title, "楼上邻居小孩制造噪音，家长视而不见");
        assert_eq!(noisy.character, "邻居家长");
        assert!(noisy.initial_message.contains("正常玩耍"));
    }

    #[test]
    fn test_no_scenario_is_empty() {
        for scenario in get_default_scenarios() {
            assert!(!scenario.id.is_empty());
            assert!(!scenario.title.is_empty());
            assert!(!scenario.description.is_empty());
            assert!(!scenario.character.is_empty());
            assert!(!scenario.initial_message.is_empty());
        }
    }
}
